//! Settings module - evaluation rules and their loading.

mod goal_rules;

pub use goal_rules::GoalRules;
