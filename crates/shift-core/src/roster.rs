//! 排班期間與班別時段

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Result, ShiftError};

/// 排班期間天數
pub const HORIZON_DAYS: u32 = 30;

/// 時段總數（天數 × 班別數）
pub const SLOT_COUNT: usize = HORIZON_DAYS as usize * ShiftType::ALL.len();

/// 班別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftType {
    /// 早班
    Morning,
    /// 晚班
    Evening,
}

impl ShiftType {
    /// 所有班別（早班在前）
    pub const ALL: [ShiftType; 2] = [ShiftType::Morning, ShiftType::Evening];

    /// 班別在一天內的序號
    pub fn ordinal(self) -> usize {
        match self {
            ShiftType::Morning => 0,
            ShiftType::Evening => 1,
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftType::Morning => f.write_str("Morning"),
            ShiftType::Evening => f.write_str("Evening"),
        }
    }
}

/// 時段：(排班日, 班別)，必要人數的基本單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShiftSlot {
    /// 排班日（1 起算）
    pub day: u32,

    /// 班別
    pub shift: ShiftType,
}

impl ShiftSlot {
    /// 創建時段，排班日須落在排班期間內
    pub fn new(day: u32, shift: ShiftType) -> Result<Self> {
        if !(1..=HORIZON_DAYS).contains(&day) {
            return Err(ShiftError::InvalidDay(day));
        }
        Ok(Self { day, shift })
    }

    /// 早班時段
    pub fn morning(day: u32) -> Result<Self> {
        Self::new(day, ShiftType::Morning)
    }

    /// 晚班時段
    pub fn evening(day: u32) -> Result<Self> {
        Self::new(day, ShiftType::Evening)
    }

    /// 輸出表格使用的標籤，例如 `3-Evening`
    pub fn label(&self) -> String {
        format!("{}-{}", self.day, self.shift)
    }

    /// 在 [`all_slots`] 中的位置
    pub fn index(&self) -> usize {
        (self.day as usize - 1) * ShiftType::ALL.len() + self.shift.ordinal()
    }
}

impl fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.shift)
    }
}

/// 依日期、班別順序列出排班期間內的所有時段
pub fn all_slots() -> impl Iterator<Item = ShiftSlot> {
    (1..=HORIZON_DAYS)
        .flat_map(|day| ShiftType::ALL.into_iter().map(move |shift| ShiftSlot { day, shift }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_all_slots_order() {
        let slots: Vec<_> = all_slots().collect();

        assert_eq!(slots.len(), SLOT_COUNT);
        assert_eq!(slots[0], ShiftSlot::morning(1).unwrap());
        assert_eq!(slots[1], ShiftSlot::evening(1).unwrap());
        assert_eq!(slots[SLOT_COUNT - 1], ShiftSlot::evening(30).unwrap());

        // index 與列舉位置一致
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[rstest]
    #[case(1, ShiftType::Morning, "1-Morning")]
    #[case(3, ShiftType::Evening, "3-Evening")]
    #[case(30, ShiftType::Morning, "30-Morning")]
    fn test_slot_label(#[case] day: u32, #[case] shift: ShiftType, #[case] expected: &str) {
        let slot = ShiftSlot::new(day, shift).unwrap();
        assert_eq!(slot.label(), expected);
        assert_eq!(slot.to_string(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(31)]
    fn test_day_out_of_range(#[case] day: u32) {
        let err = ShiftSlot::morning(day).unwrap_err();
        assert!(matches!(err, ShiftError::InvalidDay(d) if d == day));
    }
}
