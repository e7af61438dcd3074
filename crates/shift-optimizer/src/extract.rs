//! 求解結果轉為班表與不足人數表

use shift_core::{
    all_slots, AssignmentTable, LinearModel, Result, ScheduleRequest, ScheduleResult, ShiftError,
    ShortageTable, SolverOutcome, SLOT_COUNT,
};

use crate::builder::VariableIndex;

/// 絕對值低於此值視為 0
pub const ZERO_TOLERANCE: f64 = 1e-9;

/// 從求解器輸出擷取兩張結果表
///
/// 只列出非零值；保留的數值原樣輸出，不做四捨五入。
pub fn extract(
    request: &ScheduleRequest,
    model: &LinearModel,
    index: &VariableIndex,
    outcome: &SolverOutcome,
) -> Result<ScheduleResult> {
    if outcome.values.len() < model.variable_count() {
        return Err(ShiftError::MissingSolution {
            expected: model.variable_count(),
            actual: outcome.values.len(),
        });
    }

    // 非零指派紀錄：(員工列, 時段序號, 值)
    let mut records = Vec::new();
    for slot in all_slots() {
        for row in 0..request.employees.len() {
            let value = index
                .assignment(row, slot)
                .and_then(|var| outcome.value(var))
                .unwrap_or(0.0);
            if value.abs() > ZERO_TOLERANCE {
                records.push((row, slot, value));
            }
        }
    }

    // 樞紐：欄位只保留出現過的時段
    let mut used = vec![false; SLOT_COUNT];
    for &(_, slot, _) in &records {
        used[slot.index()] = true;
    }
    let column_slots: Vec<_> = all_slots().filter(|slot| used[slot.index()]).collect();
    let mut column_of = vec![None; SLOT_COUNT];
    for (col, slot) in column_slots.iter().enumerate() {
        column_of[slot.index()] = Some(col);
    }

    let mut cells = vec![vec![0.0; column_slots.len()]; request.employees.len()];
    for (row, slot, value) in records {
        if let Some(col) = column_of[slot.index()] {
            cells[row][col] = value;
        }
    }

    let assignments = AssignmentTable {
        employees: request.employees.clone(),
        columns: column_slots.iter().map(|slot| slot.label()).collect(),
        cells,
    };

    let shortages = ShortageTable {
        rows: all_slots()
            .filter_map(|slot| {
                let value = index.shortage(slot).and_then(|var| outcome.value(var))?;
                (value.abs() > ZERO_TOLERANCE).then(|| (slot.label(), value))
            })
            .collect(),
    };

    Ok(ScheduleResult {
        assignments,
        shortages,
        status: outcome.status,
        objective_value: model.objective.evaluate(&outcome.values),
    })
}
