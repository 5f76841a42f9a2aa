//! Contribution domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::goals::Goal;

/// A recorded contribution towards a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: String,
    pub goal_id: String,
    pub contributor_address: String,
    pub amount: Decimal,
    /// Hash of the on-chain transaction that moved the funds.
    pub transaction_hash: String,
    pub block_number: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Contribution {
    pub fn is_from(&self, address: &str) -> bool {
        self.contributor_address.eq_ignore_ascii_case(address)
    }
}

/// Input model for recording a contribution
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub goal_id: String,
    pub contributor_address: String,
    pub amount: Decimal,
    pub transaction_hash: String,
    pub block_number: Option<i64>,
}

/// Result of recording a contribution: the stored row and the goal as it
/// was persisted alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordedContribution {
    pub contribution: Contribution,
    pub goal: Goal,
    /// True when this contribution flipped the goal to achieved.
    pub newly_achieved: bool,
}
