use async_trait::async_trait;
use familysaver_core::rewards::{NftReward, RewardRepositoryTrait};
use familysaver_core::Result;
use std::sync::Arc;

use crate::errors::StorageError;
use crate::store::MemoryStore;

pub struct RewardRepository {
    store: Arc<MemoryStore>,
}

impl RewardRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        RewardRepository { store }
    }

    fn filtered<F>(&self, predicate: F) -> Result<Vec<NftReward>>
    where
        F: Fn(&NftReward) -> bool,
    {
        Ok(self
            .store
            .rewards()?
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RewardRepositoryTrait for RewardRepository {
    fn get_reward(&self, reward_id: &str) -> Result<NftReward> {
        self.filtered(|r| r.id == reward_id)?
            .into_iter()
            .next()
            .ok_or_else(|| StorageError::NotFound(format!("Reward {reward_id}")).into())
    }

    fn load_rewards(&self) -> Result<Vec<NftReward>> {
        self.filtered(|_| true)
    }

    fn load_rewards_by_goal(&self, goal_id: &str) -> Result<Vec<NftReward>> {
        self.filtered(|r| r.goal_id == goal_id)
    }

    fn load_rewards_by_address(&self, address: &str) -> Result<Vec<NftReward>> {
        self.filtered(|r| r.is_held_by(address))
    }

    async fn insert_reward(&self, reward: NftReward) -> Result<NftReward> {
        // Holding the goal lock orders this insert after any in-flight
        // contribution to the same goal.
        let cell = self.store.goal_cell(&reward.goal_id)?;
        let _goal = MemoryStore::lock_goal(&cell)?;

        self.store.claim_token(reward.token_id, &reward.id)?;
        match self.store.rewards_mut() {
            Ok(mut rewards) => {
                rewards.push(reward.clone());
                Ok(reward)
            }
            Err(e) => {
                self.store.release_token(reward.token_id);
                Err(e.into())
            }
        }
    }
}
