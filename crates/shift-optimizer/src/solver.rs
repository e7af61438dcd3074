//! good_lp 求解器轉接

use good_lp::solvers::SolutionStatus;
use good_lp::{microlp, variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable};
use shift_core::{
    Comparison, LinearExpr, LinearModel, ModelStatus, Result, ShiftError, ShiftSolver, SolverOutcome,
    VarDomain,
};

/// 以 good_lp（microlp 後端，分支定界）求解線性模型
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpSolver;

impl GoodLpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl ShiftSolver for GoodLpSolver {
    fn solve(&self, model: &LinearModel) -> Result<SolverOutcome> {
        let start_time = std::time::Instant::now();

        let mut vars = ProblemVariables::new();
        let handles: Vec<Variable> = model
            .variables
            .iter()
            .map(|v| {
                let definition = match v.domain {
                    VarDomain::Binary => variable().binary(),
                    VarDomain::NonNegative => variable().min(0.0),
                };
                vars.add(definition.name(v.name.as_str()))
            })
            .collect();

        let objective = to_expression(&model.objective, &handles);
        let mut problem = vars.minimise(objective).using(microlp);

        for constraint in &model.constraints {
            let expr = to_expression(&constraint.expr, &handles);
            let constraint = match constraint.cmp {
                Comparison::GreaterEq => expr.geq(constraint.rhs),
                Comparison::Equal => expr.eq(constraint.rhs),
                Comparison::LessEq => expr.leq(constraint.rhs),
            };
            problem = problem.with(constraint);
        }

        let outcome = match problem.solve() {
            Ok(solution) => {
                let values = handles.iter().map(|&v| solution.value(v)).collect();
                SolverOutcome::solved(map_status(solution.status()), values)
            }
            Err(ResolutionError::Infeasible) => SolverOutcome::without_solution(ModelStatus::Infeasible),
            Err(ResolutionError::Unbounded) => SolverOutcome::without_solution(ModelStatus::Unbounded),
            Err(other) => return Err(ShiftError::SolverFailure(other.to_string())),
        };

        tracing::debug!(
            "求解器 {} 完成：狀態 {}，耗時 {:?}",
            model.name,
            outcome.status,
            start_time.elapsed()
        );

        Ok(outcome)
    }
}

fn to_expression(expr: &LinearExpr, handles: &[Variable]) -> Expression {
    let mut out = Expression::from(expr.constant);
    for &(var, coefficient) in &expr.terms {
        out.add_mul(coefficient, handles[var.0]);
    }
    out
}

fn map_status(status: SolutionStatus) -> ModelStatus {
    match status {
        SolutionStatus::Optimal => ModelStatus::Optimal,
        SolutionStatus::TimeLimit => ModelStatus::TimedOut,
        _ => ModelStatus::Feasible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shift_core::LinearModel;

    #[test]
    fn test_solve_small_model() {
        // min s - x, x + s >= 1, x binary
        let mut model = LinearModel::new("small");
        let x = model.add_variable("x", VarDomain::Binary);
        let s = model.add_variable("s", VarDomain::NonNegative);
        model.objective = LinearExpr::new().with_term(s, 1.0).with_term(x, -1.0);
        model.add_constraint(
            "cover",
            LinearExpr::new().with_term(x, 1.0).with_term(s, 1.0),
            Comparison::GreaterEq,
            1.0,
        );

        let outcome = GoodLpSolver::new().solve(&model).unwrap();

        assert_eq!(outcome.status, ModelStatus::Optimal);
        assert!((outcome.value(x).unwrap() - 1.0).abs() < 1e-6);
        assert!(outcome.value(s).unwrap().abs() < 1e-6);
    }

    #[test]
    fn test_infeasible_model() {
        let mut model = LinearModel::new("infeasible");
        let x = model.add_variable("x", VarDomain::Binary);
        model.objective = LinearExpr::new().with_term(x, 1.0);
        model.add_constraint("high", LinearExpr::new().with_term(x, 1.0), Comparison::GreaterEq, 2.0);

        let outcome = GoodLpSolver::new().solve(&model).unwrap();

        assert_eq!(outcome.status, ModelStatus::Infeasible);
        assert!(outcome.values.is_empty());
    }

    #[test]
    fn test_unbounded_model() {
        // min -s, s >= 0 無上界
        let mut model = LinearModel::new("unbounded");
        let s = model.add_variable("s", VarDomain::NonNegative);
        model.objective = LinearExpr::new().with_term(s, -1.0);

        let outcome = GoodLpSolver::new().solve(&model).unwrap();

        assert_eq!(outcome.status, ModelStatus::Unbounded);
    }
}
