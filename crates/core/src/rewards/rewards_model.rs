//! Achievement reward domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An NFT minted by the savings contract when a goal is achieved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NftReward {
    pub id: String,
    pub goal_id: String,
    pub recipient_address: String,
    pub token_id: i64,
    pub transaction_hash: String,
    pub created_at: DateTime<Utc>,
}

impl NftReward {
    pub fn is_held_by(&self, address: &str) -> bool {
        self.recipient_address.eq_ignore_ascii_case(address)
    }
}

/// Input model for recording a reward
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewNftReward {
    pub goal_id: String,
    pub recipient_address: String,
    pub token_id: i64,
    pub transaction_hash: String,
}
