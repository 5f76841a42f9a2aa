//! Domain event types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These describe facts about goal data. Runtime adapters translate them into
/// platform actions (refreshing views, notifying family members, minting
/// reward NFTs through the contract, and so on).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A goal was created.
    GoalCreated {
        goal_id: String,
        creator_address: String,
        deadline: DateTime<Utc>,
    },

    /// A contribution was recorded against a goal.
    ContributionRecorded {
        goal_id: String,
        contribution_id: String,
        contributor_address: String,
        amount: Decimal,
        saved_amount: Decimal,
    },

    /// A goal crossed its achievement threshold. Emitted once per goal.
    GoalAchieved {
        goal_id: String,
        saved_amount: Decimal,
    },

    /// An achievement reward was recorded.
    RewardIssued {
        goal_id: String,
        recipient_address: String,
        token_id: i64,
    },
}

impl DomainEvent {
    /// Creates a GoalCreated event.
    pub fn goal_created(goal_id: String, creator_address: String, deadline: DateTime<Utc>) -> Self {
        Self::GoalCreated {
            goal_id,
            creator_address,
            deadline,
        }
    }

    /// Creates a ContributionRecorded event.
    pub fn contribution_recorded(
        goal_id: String,
        contribution_id: String,
        contributor_address: String,
        amount: Decimal,
        saved_amount: Decimal,
    ) -> Self {
        Self::ContributionRecorded {
            goal_id,
            contribution_id,
            contributor_address,
            amount,
            saved_amount,
        }
    }

    /// Creates a GoalAchieved event.
    pub fn goal_achieved(goal_id: String, saved_amount: Decimal) -> Self {
        Self::GoalAchieved {
            goal_id,
            saved_amount,
        }
    }

    /// Creates a RewardIssued event.
    pub fn reward_issued(goal_id: String, recipient_address: String, token_id: i64) -> Self {
        Self::RewardIssued {
            goal_id,
            recipient_address,
            token_id,
        }
    }

    /// The goal this event is about.
    pub fn goal_id(&self) -> &str {
        match self {
            Self::GoalCreated { goal_id, .. }
            | Self::ContributionRecorded { goal_id, .. }
            | Self::GoalAchieved { goal_id, .. }
            | Self::RewardIssued { goal_id, .. } => goal_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_domain_event_serialization() {
        let event = DomainEvent::contribution_recorded(
            "goal-1".to_string(),
            "c-1".to_string(),
            "0xabc".to_string(),
            dec!(0.5),
            dec!(2.5),
        );

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("contribution_recorded"));
        assert!(json.contains("\"0.5\""));

        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            DomainEvent::ContributionRecorded {
                goal_id,
                amount,
                saved_amount,
                ..
            } => {
                assert_eq!(goal_id, "goal-1");
                assert_eq!(amount, dec!(0.5));
                assert_eq!(saved_amount, dec!(2.5));
            }
            _ => panic!("Expected ContributionRecorded"),
        }
    }

    #[test]
    fn test_goal_achieved_serialization() {
        let event = DomainEvent::goal_achieved("goal-9".to_string(), dec!(80));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, event);
        assert_eq!(deserialized.goal_id(), "goal-9");
    }
}
