//! 排班需求輸入

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::roster::{ShiftSlot, ShiftType, HORIZON_DAYS};
use crate::{Result, ShiftError};

/// 員工 → 希望班別時段
pub type DesiredShifts = HashMap<String, HashSet<ShiftSlot>>;

/// 排班日 → 班別 → 必要人數
pub type RequiredShifts = HashMap<u32, HashMap<ShiftType, u32>>;

/// 一次排班求解的完整輸入
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// 員工清單（決定輸出表格的列順序）
    pub employees: Vec<String>,

    /// 每位員工的希望班別
    pub desired_shifts: DesiredShifts,

    /// 每個時段的必要人數
    pub required_shifts: RequiredShifts,
}

impl ScheduleRequest {
    /// 創建新的排班需求
    pub fn new(
        employees: Vec<String>,
        desired_shifts: DesiredShifts,
        required_shifts: RequiredShifts,
    ) -> Self {
        Self {
            employees,
            desired_shifts,
            required_shifts,
        }
    }

    /// 檢查輸入是否可建模
    ///
    /// 只檢查員工清單非空；希望班別與必要人數的缺漏會在建模查表時才報錯。
    pub fn validate(&self) -> Result<()> {
        if self.employees.is_empty() {
            return Err(ShiftError::NoEmployees);
        }
        Ok(())
    }

    /// 取得員工的希望班別
    pub fn desired_for(&self, employee: &str) -> Result<&HashSet<ShiftSlot>> {
        self.desired_shifts
            .get(employee)
            .ok_or_else(|| ShiftError::MissingDesiredShifts(employee.to_string()))
    }

    /// 取得時段的必要人數
    pub fn required_for(&self, slot: ShiftSlot) -> Result<u32> {
        self.required_shifts
            .get(&slot.day)
            .and_then(|by_shift| by_shift.get(&slot.shift))
            .copied()
            .ok_or(ShiftError::MissingCoverage {
                day: slot.day,
                shift: slot.shift,
            })
    }

    /// 員工是否希望該時段
    pub fn is_desired(&self, employee: &str, slot: ShiftSlot) -> Result<bool> {
        Ok(self.desired_for(employee)?.contains(&slot))
    }
}

/// 建立每天相同的必要人數表
pub fn uniform_required(morning: u32, evening: u32) -> RequiredShifts {
    (1..=HORIZON_DAYS)
        .map(|day| {
            let by_shift = HashMap::from([(ShiftType::Morning, morning), (ShiftType::Evening, evening)]);
            (day, by_shift)
        })
        .collect()
}
