//! # Shift Optimizer
//!
//! 排班整數規劃：建模、求解、結果擷取

pub mod builder;
pub mod extract;
pub mod scheduler;
pub mod solver;
pub mod verify;

// Re-export 主要類型
pub use builder::{BuiltModel, ModelBuilder, VariableIndex};
pub use extract::{extract, ZERO_TOLERANCE};
pub use scheduler::{generate_shifts, ShiftScheduler};
pub use solver::GoodLpSolver;
pub use verify::{check_solution, Violation};
