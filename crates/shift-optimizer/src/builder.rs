//! 排班模型建構

use shift_core::{
    all_slots, Comparison, LinearExpr, LinearModel, Result, ScheduleRequest, SchedulerConfig,
    ShiftSlot, StaffingCap, VarDomain, VarId, VariableLayout, SLOT_COUNT,
};

/// 變數索引：從 (員工列, 時段) 找回模型變數
#[derive(Debug, Clone)]
pub struct VariableIndex {
    /// assignments[員工列][時段序號]；None 表示該組合未宣告變數（固定為 0）
    assignments: Vec<Vec<Option<VarId>>>,

    /// shortages[時段序號]
    shortages: Vec<VarId>,
}

impl VariableIndex {
    /// 指派變數
    pub fn assignment(&self, employee_row: usize, slot: ShiftSlot) -> Option<VarId> {
        self.assignments
            .get(employee_row)
            .and_then(|row| row.get(slot.index()))
            .copied()
            .flatten()
    }

    /// 不足人數變數
    pub fn shortage(&self, slot: ShiftSlot) -> Option<VarId> {
        self.shortages.get(slot.index()).copied()
    }

    /// 員工列數
    pub fn employee_count(&self) -> usize {
        self.assignments.len()
    }

    /// 已宣告的指派變數數量
    pub fn assignment_var_count(&self) -> usize {
        self.assignments
            .iter()
            .map(|row| row.iter().filter(|v| v.is_some()).count())
            .sum()
    }
}

/// 建構完成的模型
#[derive(Debug, Clone)]
pub struct BuiltModel {
    pub model: LinearModel,
    pub index: VariableIndex,
}

/// 排班模型建構器
pub struct ModelBuilder<'a> {
    request: &'a ScheduleRequest,
    config: &'a SchedulerConfig,
}

impl<'a> ModelBuilder<'a> {
    /// 創建新的建構器
    pub fn new(request: &'a ScheduleRequest, config: &'a SchedulerConfig) -> Self {
        Self { request, config }
    }

    /// 建構模型
    ///
    /// 1. 每個時段一個不足人數變數，每個 (員工, 時段) 一個 0/1 指派變數
    /// 2. 目標：不足懲罰 − 希望獎勵
    /// 3. 約束：指派 + 不足 ≥ 必要人數；非希望時段鎖為 0；（可選）指派 ≤ 必要人數
    pub fn build(&self) -> Result<BuiltModel> {
        let request = self.request;
        let weights = self.config.weights;
        let dense = self.config.layout == VariableLayout::Dense;

        let mut model = LinearModel::new("Shift_Scheduling");
        let mut shortages = Vec::with_capacity(SLOT_COUNT);
        let mut assignments = vec![vec![None; SLOT_COUNT]; request.employees.len()];

        // Step 1: 變數
        for slot in all_slots() {
            let shortage = model.add_variable(
                format!("Shortage_{}_{}", slot.day, slot.shift),
                VarDomain::NonNegative,
            );
            shortages.push(shortage);

            for (row, employee) in request.employees.iter().enumerate() {
                if dense || request.is_desired(employee, slot)? {
                    let var = model.add_variable(
                        format!("{}_{}_{}", employee, slot.day, slot.shift),
                        VarDomain::Binary,
                    );
                    assignments[row][slot.index()] = Some(var);
                }
            }
        }

        // Step 2: 目標函數
        let mut objective = LinearExpr::new();
        for &shortage in &shortages {
            objective.add_term(shortage, weights.shortage_penalty);
        }
        for (row, employee) in request.employees.iter().enumerate() {
            let desired = request.desired_for(employee)?;
            for slot in all_slots().filter(|slot| desired.contains(slot)) {
                if let Some(var) = assignments[row][slot.index()] {
                    objective.add_term(var, -weights.preference_reward);
                }
            }
        }
        model.objective = objective;

        // Step 3: 必要人數（含不足）
        for slot in all_slots() {
            let required = f64::from(request.required_for(slot)?);

            let mut staffed = LinearExpr::new();
            for row in &assignments {
                if let Some(var) = row[slot.index()] {
                    staffed.add_term(var, 1.0);
                }
            }

            let covered = staffed.clone().with_term(shortages[slot.index()], 1.0);
            model.add_constraint(
                format!("Coverage_{}_{}", slot.day, slot.shift),
                covered,
                Comparison::GreaterEq,
                required,
            );

            if self.config.staffing_cap == StaffingCap::AtRequirement && !staffed.is_empty() {
                model.add_constraint(
                    format!("Cap_{}_{}", slot.day, slot.shift),
                    staffed,
                    Comparison::LessEq,
                    required,
                );
            }
        }

        // Step 4: 非希望時段不得指派
        if dense {
            for (row, employee) in request.employees.iter().enumerate() {
                let desired = request.desired_for(employee)?;
                for slot in all_slots().filter(|slot| !desired.contains(slot)) {
                    if let Some(var) = assignments[row][slot.index()] {
                        model.add_constraint(
                            format!("Lock_{}_{}_{}", employee, slot.day, slot.shift),
                            LinearExpr::new().with_term(var, 1.0),
                            Comparison::Equal,
                            0.0,
                        );
                    }
                }
            }
        }

        tracing::debug!(
            "模型建構完成：變數 {} 個，約束 {} 條",
            model.variable_count(),
            model.constraint_count()
        );

        Ok(BuiltModel {
            model,
            index: VariableIndex {
                assignments,
                shortages,
            },
        })
    }
}
