//! 排班日與實際日期的對照

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::roster::{ShiftSlot, HORIZON_DAYS};

/// 排班日曆：第 1 天對應 `start_date`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterCalendar {
    /// 排班期間第一天
    pub start_date: NaiveDate,
}

impl RosterCalendar {
    /// 創建排班日曆
    pub fn new(start_date: NaiveDate) -> Self {
        Self { start_date }
    }

    /// 排班日對應的日期；超出排班期間時回傳 None
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        if !(1..=HORIZON_DAYS).contains(&day) {
            return None;
        }
        self.start_date.checked_add_days(Days::new(u64::from(day - 1)))
    }

    /// 排班期間最後一天
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.date_of(HORIZON_DAYS)
    }

    /// 帶日期的時段標籤，例如 `2025-11-03-Evening`
    pub fn dated_label(&self, slot: ShiftSlot) -> Option<String> {
        self.date_of(slot.day)
            .map(|date| format!("{}-{}", date.format("%Y-%m-%d"), slot.shift))
    }
}
