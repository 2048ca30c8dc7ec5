use crate::recommendations::{Category, Level, Priority};

pub const MAX_URGENCY: u8 = 5;

pub fn priority_weight(priority: Priority) -> f64 {
    match priority {
        Priority::Critical => 10.0,
        Priority::High => 8.0,
        Priority::Medium => 5.0,
        Priority::Low => 2.0,
    }
}

/// Shared score table for impact and effort buckets.
pub fn level_score(level: Level) -> f64 {
    match level {
        Level::Low => 1.0,
        Level::Medium => 3.0,
        Level::High => 5.0,
    }
}

pub fn priority_score(priority: Priority, impact: Level, effort: Level) -> f64 {
    priority_weight(priority) * level_score(impact) / level_score(effort)
}

pub fn roi(impact: Level, effort: Level) -> f64 {
    level_score(impact) / level_score(effort)
}

pub fn urgency(priority: Priority, category: Category) -> u8 {
    let mut urgency = 1u8;
    if priority.is_pressing() {
        urgency += 2;
    }
    if matches!(category, Category::Security | Category::Performance) {
        urgency += 1;
    }
    urgency.min(MAX_URGENCY)
}
