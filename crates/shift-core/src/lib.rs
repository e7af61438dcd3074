//! # Shift Core
//!
//! 排班核心資料模型、線性模型與求解器契約

pub mod calendar;
pub mod config;
pub mod model;
pub mod plan;
pub mod request;
pub mod roster;

// Re-export 主要類型
pub use calendar::RosterCalendar;
pub use config::{ObjectiveWeights, SchedulerConfig, StaffingCap, StatusPolicy, VariableLayout};
pub use model::{
    Comparison, LinearConstraint, LinearExpr, LinearModel, ModelStatus, ModelVariable,
    ShiftSolver, SolverOutcome, VarDomain, VarId,
};
pub use plan::{AssignmentTable, ScheduleResult, ShortageTable};
pub use request::{uniform_required, DesiredShifts, RequiredShifts, ScheduleRequest};
pub use roster::{all_slots, ShiftSlot, ShiftType, HORIZON_DAYS, SLOT_COUNT};

/// 排班錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ShiftError {
    #[error("員工清單為空")]
    NoEmployees,

    #[error("無效的排班日: {0}（有效範圍 1-{max}）", max = HORIZON_DAYS)]
    InvalidDay(u32),

    #[error("找不到員工的希望班別: {0}")]
    MissingDesiredShifts(String),

    #[error("找不到必要人數: 第 {day} 天 {shift}")]
    MissingCoverage { day: u32, shift: ShiftType },

    #[error("求解器未取得最佳解: {0}")]
    SolverStatus(ModelStatus),

    #[error("求解器錯誤: {0}")]
    SolverFailure(String),

    #[error("求解結果缺少變數值: 預期 {expected} 個，實際 {actual} 個")]
    MissingSolution { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ShiftError>;
