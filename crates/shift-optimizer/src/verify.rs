//! 排班結果檢查

use shift_core::{all_slots, Result, ScheduleRequest, ScheduleResult, ShiftSlot, StaffingCap};

/// 檢查容許誤差
pub const CHECK_TOLERANCE: f64 = 1e-6;

/// 違規項目
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// 指派 + 不足 與必要人數不符
    Coverage {
        slot: ShiftSlot,
        staffed: f64,
        shortage: f64,
        required: u32,
    },
    /// 指派到非希望時段
    UndesiredAssignment { employee: String, slot: ShiftSlot },
    /// 指派值不是 0 或 1
    Fractional {
        employee: String,
        slot: ShiftSlot,
        value: f64,
    },
    /// 不足人數為負
    NegativeShortage { slot: ShiftSlot, value: f64 },
}

/// 檢查結果是否滿足排班性質
///
/// - 有人數上限時：指派 + 不足 = 必要人數
/// - 無上限時：指派 + 不足 ≥ 必要人數
/// - 只指派到希望時段，指派值為 0/1，不足人數非負
pub fn check_solution(
    request: &ScheduleRequest,
    result: &ScheduleResult,
    cap: StaffingCap,
) -> Result<Vec<Violation>> {
    let mut violations = Vec::new();

    for slot in all_slots() {
        let label = slot.label();
        let required = request.required_for(slot)?;
        let staffed = result.assignments.column_total(&label);
        let shortage = result.shortages.get(&label).unwrap_or(0.0);

        if shortage < -CHECK_TOLERANCE {
            violations.push(Violation::NegativeShortage {
                slot,
                value: shortage,
            });
        }

        let covered = staffed + shortage;
        let coverage_ok = match cap {
            StaffingCap::AtRequirement => (covered - f64::from(required)).abs() <= CHECK_TOLERANCE,
            StaffingCap::Uncapped => covered >= f64::from(required) - CHECK_TOLERANCE,
        };
        if !coverage_ok {
            violations.push(Violation::Coverage {
                slot,
                staffed,
                shortage,
                required,
            });
        }

        for employee in &request.employees {
            let value = result.assignments.get(employee, &label).unwrap_or(0.0);
            if value.abs() <= CHECK_TOLERANCE {
                continue;
            }
            if !request.is_desired(employee, slot)? {
                violations.push(Violation::UndesiredAssignment {
                    employee: employee.clone(),
                    slot,
                });
            }
            if (value - 1.0).abs() > CHECK_TOLERANCE {
                violations.push(Violation::Fractional {
                    employee: employee.clone(),
                    slot,
                    value,
                });
            }
        }
    }

    Ok(violations)
}
