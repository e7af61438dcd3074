//! 月度早晚班排班示例

use chrono::NaiveDate;
use shift_core::{all_slots, uniform_required, DesiredShifts, RosterCalendar, ShiftSlot, ShiftType};
use shift_optimizer::generate_shifts;
use std::collections::HashSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== 月度排班示例 ===\n");

    let employees: Vec<String> = ["Aiko", "Ben", "Chen"].iter().map(|s| s.to_string()).collect();

    // Aiko 只上早班，Ben 只上晚班，Chen 週末以外都可以
    let mut desired = DesiredShifts::new();
    desired.insert(
        "Aiko".to_string(),
        all_slots().filter(|s| s.shift == ShiftType::Morning).collect(),
    );
    desired.insert(
        "Ben".to_string(),
        all_slots().filter(|s| s.shift == ShiftType::Evening).collect(),
    );
    desired.insert(
        "Chen".to_string(),
        all_slots().filter(|s| s.day % 7 != 6 && s.day % 7 != 0).collect::<HashSet<_>>(),
    );

    let required = uniform_required(2, 1);
    let result = generate_shifts(employees, desired, required)?;

    let calendar = RosterCalendar::new(NaiveDate::from_ymd_opt(2025, 11, 1).ok_or("無效的起始日")?);

    println!("班表:");
    for employee in &result.assignments.employees {
        println!("  - {}: {} 班", employee, result.assignments.total_for(employee));
    }

    println!("\n不足人數:");
    for (label, shortage) in &result.shortages.rows {
        println!("  - {}: {}", label, shortage);
    }

    let first = ShiftSlot::morning(1)?;
    if let Some(label) = calendar.dated_label(first) {
        println!("\n第 1 天早班對應 {}", label);
    }
    println!("目標函數值: {}", result.objective_value);

    Ok(())
}
