//! 排班結果表格

use serde::{Deserialize, Serialize};

use crate::model::ModelStatus;

/// 班表（員工 × 時段標籤）
///
/// 欄位只包含至少有一筆非零指派的時段，未指派的格子為 0。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentTable {
    /// 列：員工（依輸入順序）
    pub employees: Vec<String>,

    /// 欄：時段標籤（依時段順序）
    pub columns: Vec<String>,

    /// cells[列][欄] = 指派值
    pub cells: Vec<Vec<f64>>,
}

impl AssignmentTable {
    /// 查詢單一格
    pub fn get(&self, employee: &str, label: &str) -> Option<f64> {
        let row = self.employees.iter().position(|e| e == employee)?;
        let col = self.columns.iter().position(|c| c == label)?;
        self.cells.get(row)?.get(col).copied()
    }

    /// 員工的指派總數
    pub fn total_for(&self, employee: &str) -> f64 {
        self.employees
            .iter()
            .position(|e| e == employee)
            .and_then(|row| self.cells.get(row))
            .map(|row| row.iter().sum())
            .unwrap_or(0.0)
    }

    /// 時段的指派總數
    pub fn column_total(&self, label: &str) -> f64 {
        match self.columns.iter().position(|c| c == label) {
            Some(col) => self.cells.iter().filter_map(|row| row.get(col)).sum(),
            None => 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// 不足人數表（只列出不足人數非零的時段）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortageTable {
    /// (時段標籤, 不足人數)，依時段順序
    pub rows: Vec<(String, f64)>,
}

impl ShortageTable {
    /// 查詢時段的不足人數；沒有該列表示不足為 0
    pub fn get(&self, label: &str) -> Option<f64> {
        self.rows.iter().find(|(l, _)| l == label).map(|(_, v)| *v)
    }

    /// 不足人數合計
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|(_, v)| v).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 一次排班求解的結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// 班表
    pub assignments: AssignmentTable,

    /// 不足人數表
    pub shortages: ShortageTable,

    /// 求解狀態
    pub status: ModelStatus,

    /// 目標函數值
    pub objective_value: f64,
}
