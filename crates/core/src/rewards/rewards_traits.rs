use async_trait::async_trait;

use crate::errors::Result;
use crate::rewards::rewards_model::{NewNftReward, NftReward};

/// Trait for reward repository operations
#[async_trait]
pub trait RewardRepositoryTrait: Send + Sync {
    fn get_reward(&self, reward_id: &str) -> Result<NftReward>;
    fn load_rewards(&self) -> Result<Vec<NftReward>>;
    fn load_rewards_by_goal(&self, goal_id: &str) -> Result<Vec<NftReward>>;
    fn load_rewards_by_address(&self, address: &str) -> Result<Vec<NftReward>>;
    /// Fails with a unique violation if the token id is already recorded.
    async fn insert_reward(&self, reward: NftReward) -> Result<NftReward>;
}

/// Trait for reward service operations
#[async_trait]
pub trait RewardServiceTrait: Send + Sync {
    async fn create_reward(&self, new_reward: NewNftReward) -> Result<NftReward>;
    fn get_reward(&self, reward_id: &str) -> Result<NftReward>;
    fn get_rewards_by_goal(&self, goal_id: &str) -> Result<Vec<NftReward>>;
    fn get_rewards_by_address(&self, address: &str) -> Result<Vec<NftReward>>;
}
