//! # Shift
//!
//! 月度早晚班排班：依必要人數與員工希望班別求解整數規劃模型

pub use shift_core::{
    uniform_required, DesiredShifts, ModelStatus, RequiredShifts, ScheduleRequest, ScheduleResult,
    SchedulerConfig, ShiftError, ShiftSlot, ShiftType,
};
pub use shift_optimizer::{generate_shifts, GoodLpSolver, ShiftScheduler};
