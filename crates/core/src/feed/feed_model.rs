//! Activity feed models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    GoalCreated,
    Contribution,
    Achievement,
}

/// One line of the family activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    /// Id of the record the item was derived from.
    pub id: String,
    pub kind: ActivityKind,
    pub goal_id: String,
    pub goal_name: String,
    pub actor_address: String,
    pub message: String,
    pub amount: Option<Decimal>,
    pub timestamp: DateTime<Utc>,
}

/// Shortens a wallet address to `0x1234...abcd` for display.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x52908400098527886E0F7030069857D2E4169EE7"),
            "0x5290...9EE7"
        );
        assert_eq!(short_address("0xabc"), "0xabc");
    }

    #[test]
    fn test_activity_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ActivityKind::GoalCreated).unwrap(),
            "\"goal_created\""
        );
    }
}
