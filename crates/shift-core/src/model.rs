//! 與求解器無關的線性規劃模型與求解器契約

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Result;

/// 變數在模型中的編號
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub usize);

/// 變數定義域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarDomain {
    /// {0, 1}
    Binary,
    /// [0, +∞) 連續
    NonNegative,
}

/// 模型變數
#[derive(Debug, Clone)]
pub struct ModelVariable {
    pub name: String,
    pub domain: VarDomain,
}

/// 線性表達式：Σ 係數 × 變數 + 常數
#[derive(Debug, Clone, Default)]
pub struct LinearExpr {
    pub terms: Vec<(VarId, f64)>,
    pub constant: f64,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入一項
    pub fn add_term(&mut self, var: VarId, coefficient: f64) {
        self.terms.push((var, coefficient));
    }

    /// 建構器模式：加入一項
    pub fn with_term(mut self, var: VarId, coefficient: f64) -> Self {
        self.add_term(var, coefficient);
        self
    }

    /// 以變數值計算表達式
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coefficient)| coefficient * values.get(var.0).copied().unwrap_or(0.0))
            .sum::<f64>()
            + self.constant
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// 約束比較方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    GreaterEq,
    Equal,
    LessEq,
}

/// 線性約束：`expr cmp rhs`
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    pub name: String,
    pub expr: LinearExpr,
    pub cmp: Comparison,
    pub rhs: f64,
}

impl LinearConstraint {
    /// 檢查變數值是否滿足約束（容許 `tolerance` 誤差）
    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs = self.expr.evaluate(values);
        match self.cmp {
            Comparison::GreaterEq => lhs >= self.rhs - tolerance,
            Comparison::Equal => (lhs - self.rhs).abs() <= tolerance,
            Comparison::LessEq => lhs <= self.rhs + tolerance,
        }
    }
}

/// 最小化線性模型
#[derive(Debug, Clone, Default)]
pub struct LinearModel {
    pub name: String,
    pub variables: Vec<ModelVariable>,
    pub objective: LinearExpr,
    pub constraints: Vec<LinearConstraint>,
}

impl LinearModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// 宣告變數
    pub fn add_variable(&mut self, name: impl Into<String>, domain: VarDomain) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(ModelVariable {
            name: name.into(),
            domain,
        });
        id
    }

    /// 加入約束
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        expr: LinearExpr,
        cmp: Comparison,
        rhs: f64,
    ) {
        self.constraints.push(LinearConstraint {
            name: name.into(),
            expr,
            cmp,
            rhs,
        });
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

/// 求解狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelStatus {
    /// 最佳解
    Optimal,
    /// 可行但未證明最佳（例如達到間隙限制）
    Feasible,
    /// 無可行解
    Infeasible,
    /// 目標無界
    Unbounded,
    /// 達到時間限制
    TimedOut,
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ModelStatus::Optimal => "optimal",
            ModelStatus::Feasible => "feasible",
            ModelStatus::Infeasible => "infeasible",
            ModelStatus::Unbounded => "unbounded",
            ModelStatus::TimedOut => "timed out",
        };
        f.write_str(text)
    }
}

/// 求解器輸出
#[derive(Debug, Clone)]
pub struct SolverOutcome {
    /// 求解狀態
    pub status: ModelStatus,

    /// 依 [`VarId`] 排列的變數值；無解時為空
    pub values: Vec<f64>,
}

impl SolverOutcome {
    /// 帶有變數值的結果
    pub fn solved(status: ModelStatus, values: Vec<f64>) -> Self {
        Self { status, values }
    }

    /// 沒有變數值的結果（不可行、無界等）
    pub fn without_solution(status: ModelStatus) -> Self {
        Self {
            status,
            values: Vec::new(),
        }
    }

    pub fn value(&self, var: VarId) -> Option<f64> {
        self.values.get(var.0).copied()
    }
}

/// 求解器契約
///
/// 接收最小化線性模型，回傳每個變數的數值與狀態。實作端不得假設模型大小。
pub trait ShiftSolver {
    fn solve(&self, model: &LinearModel) -> Result<SolverOutcome>;
}

impl<S: ShiftSolver + ?Sized> ShiftSolver for &S {
    fn solve(&self, model: &LinearModel) -> Result<SolverOutcome> {
        (**self).solve(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_model() {
        let mut model = LinearModel::new("test");
        let x = model.add_variable("x", VarDomain::Binary);
        let s = model.add_variable("s", VarDomain::NonNegative);

        model.add_constraint(
            "cover",
            LinearExpr::new().with_term(x, 1.0).with_term(s, 1.0),
            Comparison::GreaterEq,
            1.0,
        );

        assert_eq!(x, VarId(0));
        assert_eq!(s, VarId(1));
        assert_eq!(model.variable_count(), 2);
        assert_eq!(model.constraint_count(), 1);
    }

    #[test]
    fn test_evaluate_and_satisfy() {
        let expr = LinearExpr::new().with_term(VarId(0), 2.0).with_term(VarId(1), -1.0);
        assert_eq!(expr.evaluate(&[1.0, 0.5]), 1.5);

        let constraint = LinearConstraint {
            name: "c".to_string(),
            expr,
            cmp: Comparison::Equal,
            rhs: 1.5,
        };
        assert!(constraint.is_satisfied(&[1.0, 0.5], 1e-9));
        assert!(!constraint.is_satisfied(&[1.0, 0.0], 1e-9));
    }
}
