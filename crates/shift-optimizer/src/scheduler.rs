//! 排班主入口

use shift_core::{
    DesiredShifts, RequiredShifts, Result, ScheduleRequest, ScheduleResult, SchedulerConfig,
    ShiftError, ShiftSolver,
};

use crate::builder::ModelBuilder;
use crate::extract::extract;
use crate::solver::GoodLpSolver;

/// 排班求解器
///
/// 每次呼叫都建立並丟棄自己的模型，不保留跨呼叫狀態。
pub struct ShiftScheduler<S: ShiftSolver> {
    solver: S,
    config: SchedulerConfig,
}

impl<S: ShiftSolver> ShiftScheduler<S> {
    /// 創建新的排班求解器
    pub fn new(solver: S, config: SchedulerConfig) -> Self {
        Self { solver, config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// 建模、求解並擷取結果表
    pub fn generate_shifts(&self, request: &ScheduleRequest) -> Result<ScheduleResult> {
        tracing::info!(
            "開始排班求解：員工 {} 人，佈局 {:?}，上限 {:?}",
            request.employees.len(),
            self.config.layout,
            self.config.staffing_cap
        );

        let start_time = std::time::Instant::now();
        request.validate()?;

        // Step 1: 建模
        tracing::debug!("Step 1: 建模");
        let built = ModelBuilder::new(request, &self.config).build()?;

        // Step 2: 求解
        tracing::debug!("Step 2: 求解");
        let outcome = self.solver.solve(&built.model)?;
        if !self.config.status_policy.accepts(outcome.status) {
            tracing::warn!("求解狀態 {} 不被接受，停止擷取", outcome.status);
            return Err(ShiftError::SolverStatus(outcome.status));
        }

        // Step 3: 擷取結果
        tracing::debug!("Step 3: 擷取結果");
        let result = extract(request, &built.model, &built.index, &outcome)?;

        tracing::info!("排班求解完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "指派時段 {} 個，不足時段 {} 個，不足人數合計 {}",
            result.assignments.columns.len(),
            result.shortages.len(),
            result.shortages.total()
        );

        Ok(result)
    }
}

impl Default for ShiftScheduler<GoodLpSolver> {
    fn default() -> Self {
        Self::new(GoodLpSolver::new(), SchedulerConfig::default())
    }
}

/// 以預設求解器與配置產生班表
pub fn generate_shifts(
    employees: Vec<String>,
    desired_shifts: DesiredShifts,
    required_shifts: RequiredShifts,
) -> Result<ScheduleResult> {
    let request = ScheduleRequest::new(employees, desired_shifts, required_shifts);
    ShiftScheduler::default().generate_shifts(&request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use shift_core::{
        uniform_required, LinearModel, ModelStatus, ShiftSlot, SolverOutcome, StatusPolicy,
    };
    use std::cell::Cell;
    use std::collections::HashSet;

    /// 固定回傳指定狀態的假求解器；有解時所有變數為 0
    struct FixedSolver {
        status: ModelStatus,
        with_values: bool,
        calls: Cell<usize>,
    }

    impl FixedSolver {
        fn new(status: ModelStatus, with_values: bool) -> Self {
            Self {
                status,
                with_values,
                calls: Cell::new(0),
            }
        }
    }

    impl ShiftSolver for FixedSolver {
        fn solve(&self, model: &LinearModel) -> Result<SolverOutcome> {
            self.calls.set(self.calls.get() + 1);
            if self.with_values {
                Ok(SolverOutcome::solved(self.status, vec![0.0; model.variable_count()]))
            } else {
                Ok(SolverOutcome::without_solution(self.status))
            }
        }
    }

    fn request() -> ScheduleRequest {
        let mut desired = DesiredShifts::new();
        desired.insert("Alice".to_string(), HashSet::from([ShiftSlot::morning(1).unwrap()]));
        ScheduleRequest::new(vec!["Alice".to_string()], desired, uniform_required(0, 0))
    }

    #[rstest]
    #[case(ModelStatus::Infeasible, false)]
    #[case(ModelStatus::Unbounded, false)]
    #[case(ModelStatus::TimedOut, true)]
    #[case(ModelStatus::Feasible, true)]
    fn test_strict_rejects_non_optimal(#[case] status: ModelStatus, #[case] with_values: bool) {
        let scheduler = ShiftScheduler::new(FixedSolver::new(status, with_values), SchedulerConfig::new());

        let err = scheduler.generate_shifts(&request()).unwrap_err();
        assert!(matches!(err, ShiftError::SolverStatus(s) if s == status));
    }

    #[test]
    fn test_accept_feasible_extracts() {
        let config = SchedulerConfig::new().with_status_policy(StatusPolicy::AcceptFeasible);
        let scheduler = ShiftScheduler::new(FixedSolver::new(ModelStatus::TimedOut, true), config);

        let result = scheduler.generate_shifts(&request()).unwrap();

        assert_eq!(result.status, ModelStatus::TimedOut);
        assert!(result.assignments.is_empty());
        assert!(result.shortages.is_empty());
    }

    #[test]
    fn test_accept_feasible_without_values() {
        // 接受狀態但沒有數值時仍須報錯，不可擷取出空表
        let config = SchedulerConfig::new().with_status_policy(StatusPolicy::AcceptFeasible);
        let scheduler = ShiftScheduler::new(FixedSolver::new(ModelStatus::TimedOut, false), config);

        let err = scheduler.generate_shifts(&request()).unwrap_err();
        assert!(matches!(err, ShiftError::MissingSolution { .. }));
    }

    #[test]
    fn test_input_errors_skip_solver() {
        let solver = FixedSolver::new(ModelStatus::Optimal, true);
        let scheduler = ShiftScheduler::new(&solver, SchedulerConfig::new());

        let empty = ScheduleRequest::new(Vec::new(), DesiredShifts::new(), uniform_required(1, 1));
        assert!(matches!(scheduler.generate_shifts(&empty), Err(ShiftError::NoEmployees)));

        let mut missing = request();
        missing.desired_shifts.clear();
        assert!(matches!(
            scheduler.generate_shifts(&missing),
            Err(ShiftError::MissingDesiredShifts(_))
        ));

        assert_eq!(solver.calls.get(), 0);
    }
}
