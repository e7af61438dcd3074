//! 排班求解配置

use serde::{Deserialize, Serialize};

use crate::model::ModelStatus;

/// 目標函數權重
///
/// 目標 = `shortage_penalty × Σ不足人數 − preference_reward × Σ符合希望的指派`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveWeights {
    /// 每缺一人的懲罰
    pub shortage_penalty: f64,

    /// 每指派一個希望班別的獎勵
    pub preference_reward: f64,
}

impl ObjectiveWeights {
    /// 創建權重
    pub fn new(shortage_penalty: f64, preference_reward: f64) -> Self {
        Self {
            shortage_penalty,
            preference_reward,
        }
    }

    /// 建構器模式：設置不足懲罰
    pub fn with_shortage_penalty(mut self, penalty: f64) -> Self {
        self.shortage_penalty = penalty;
        self
    }

    /// 建構器模式：設置希望獎勵
    pub fn with_preference_reward(mut self, reward: f64) -> Self {
        self.preference_reward = reward;
        self
    }
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// 指派變數的宣告方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VariableLayout {
    /// 每個 (員工, 時段) 都宣告變數，非希望時段以等式鎖為 0
    #[default]
    Dense,

    /// 只宣告希望時段的變數，其餘在讀取結果時視為 0
    Sparse,
}

/// 時段人數上限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StaffingCap {
    /// 指派人數不超過必要人數，使「指派 + 不足 = 必要人數」恆成立
    #[default]
    AtRequirement,

    /// 不設上限；希望獎勵可能讓時段超額排人
    Uncapped,
}

/// 求解器回傳非最佳狀態時的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusPolicy {
    /// 只接受最佳解
    #[default]
    Strict,

    /// 接受帶有可行解的提前終止（Feasible / TimedOut）
    AcceptFeasible,
}

impl StatusPolicy {
    /// 該狀態的結果是否可以擷取
    pub fn accepts(self, status: ModelStatus) -> bool {
        match self {
            StatusPolicy::Strict => status == ModelStatus::Optimal,
            StatusPolicy::AcceptFeasible => matches!(
                status,
                ModelStatus::Optimal | ModelStatus::Feasible | ModelStatus::TimedOut
            ),
        }
    }
}

/// 排班求解配置
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// 目標函數權重
    pub weights: ObjectiveWeights,

    /// 指派變數宣告方式
    pub layout: VariableLayout,

    /// 時段人數上限
    pub staffing_cap: StaffingCap,

    /// 非最佳狀態處理
    pub status_policy: StatusPolicy,
}

impl SchedulerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置目標函數權重
    pub fn with_weights(mut self, weights: ObjectiveWeights) -> Self {
        self.weights = weights;
        self
    }

    /// 建構器模式：設置變數宣告方式
    pub fn with_layout(mut self, layout: VariableLayout) -> Self {
        self.layout = layout;
        self
    }

    /// 建構器模式：設置時段人數上限
    pub fn with_staffing_cap(mut self, cap: StaffingCap) -> Self {
        self.staffing_cap = cap;
        self
    }

    /// 建構器模式：設置非最佳狀態處理
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = SchedulerConfig::new();

        assert_eq!(config.weights, ObjectiveWeights::new(1.0, 1.0));
        assert_eq!(config.layout, VariableLayout::Dense);
        assert_eq!(config.staffing_cap, StaffingCap::AtRequirement);
        assert_eq!(config.status_policy, StatusPolicy::Strict);
    }

    #[test]
    fn test_config_builder() {
        let config = SchedulerConfig::new()
            .with_weights(ObjectiveWeights::default().with_shortage_penalty(100.0))
            .with_layout(VariableLayout::Sparse)
            .with_staffing_cap(StaffingCap::Uncapped)
            .with_status_policy(StatusPolicy::AcceptFeasible);

        assert_eq!(config.weights.shortage_penalty, 100.0);
        assert_eq!(config.weights.preference_reward, 1.0);
        assert_eq!(config.layout, VariableLayout::Sparse);
        assert_eq!(config.staffing_cap, StaffingCap::Uncapped);
        assert_eq!(config.status_policy, StatusPolicy::AcceptFeasible);
    }

    #[rstest]
    #[case(StatusPolicy::Strict, ModelStatus::Optimal, true)]
    #[case(StatusPolicy::Strict, ModelStatus::Feasible, false)]
    #[case(StatusPolicy::Strict, ModelStatus::TimedOut, false)]
    #[case(StatusPolicy::AcceptFeasible, ModelStatus::Feasible, true)]
    #[case(StatusPolicy::AcceptFeasible, ModelStatus::TimedOut, true)]
    #[case(StatusPolicy::AcceptFeasible, ModelStatus::Infeasible, false)]
    #[case(StatusPolicy::AcceptFeasible, ModelStatus::Unbounded, false)]
    fn test_status_policy(
        #[case] policy: StatusPolicy,
        #[case] status: ModelStatus,
        #[case] accepted: bool,
    ) {
        assert_eq!(policy.accepts(status), accepted);
    }
}
