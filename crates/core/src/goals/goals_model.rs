//! Goals domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::goals_errors::GoalError;

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub saved_amount: Decimal,
    pub deadline: DateTime<Utc>,
    pub creator_address: String,
    pub is_achieved: bool,
    /// Identifier of the mirrored goal in the savings contract, once known.
    pub contract_goal_id: Option<i64>,
    pub duration_in_days: i64,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// The subset of the goal the evaluator works on.
    pub fn snapshot(&self) -> GoalSnapshot {
        GoalSnapshot {
            target_amount: self.target_amount,
            saved_amount: self.saved_amount,
            deadline: self.deadline,
            is_achieved: self.is_achieved,
        }
    }

    /// Case-insensitive ownership check, matching how wallets format addresses.
    pub fn is_created_by(&self, address: &str) -> bool {
        self.creator_address.eq_ignore_ascii_case(address)
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub creator_address: String,
    pub duration_in_days: i64,
    pub contract_goal_id: Option<i64>,
}

/// Metadata update for an existing goal.
///
/// Target, deadline, balances and ownership are not part of this model:
/// they are fixed at creation or driven by contributions.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub contract_goal_id: Option<i64>,
}

impl GoalUpdate {
    pub fn apply_to(&self, goal: &Goal) -> Goal {
        let mut updated = goal.clone();
        if let Some(name) = &self.name {
            updated.name = name.trim().to_string();
        }
        if let Some(description) = &self.description {
            updated.description = Some(description.clone());
        }
        if let Some(contract_goal_id) = self.contract_goal_id {
            updated.contract_goal_id = Some(contract_goal_id);
        }
        updated
    }
}

/// Lifecycle status of a goal, derived at read time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    NearDeadline,
    Expired,
    Achieved,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::NearDeadline => "near_deadline",
            GoalStatus::Expired => "expired",
            GoalStatus::Achieved => "achieved",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of progress evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Rounded half-up, never clamped: overfunded goals exceed 100.
    pub progress_percentage: u64,
    pub status: GoalStatus,
}

/// The fields of a goal that progress and achievement depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalSnapshot {
    pub target_amount: Decimal,
    pub saved_amount: Decimal,
    pub deadline: DateTime<Utc>,
    pub is_achieved: bool,
}

/// Raw goal record as supplied by a ledger source (contract read or record
/// store export). Amounts arrive as decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerGoalRecord {
    pub target_amount: String,
    pub saved_amount: String,
    pub deadline: DateTime<Utc>,
    pub is_achieved: bool,
}

impl TryFrom<&LedgerGoalRecord> for GoalSnapshot {
    type Error = GoalError;

    fn try_from(record: &LedgerGoalRecord) -> Result<Self, Self::Error> {
        Ok(GoalSnapshot {
            target_amount: parse_ledger_amount("targetAmount", &record.target_amount)?,
            saved_amount: parse_ledger_amount("savedAmount", &record.saved_amount)?,
            deadline: record.deadline,
            is_achieved: record.is_achieved,
        })
    }
}

/// Parses a decimal string. `Decimal` has no NaN or infinity, so non-finite
/// inputs are rejected here instead of leaking into arithmetic.
fn parse_ledger_amount(field: &str, raw: &str) -> Result<Decimal, GoalError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| GoalError::InvalidGoalData(format!("{field} is not a finite decimal: '{raw}'")))
}

/// A goal together with its derived progress, as listed to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalWithProgress {
    #[serde(flatten)]
    pub goal: Goal,
    pub progress: u64,
    pub status: GoalStatus,
    pub days_remaining: i64,
}

/// Aggregate figures over a set of goals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalStats {
    pub total_goals: usize,
    pub total_saved: Decimal,
    pub completed_goals: usize,
    pub nft_rewards: usize,
}
