use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::rewards_model::{NewNftReward, NftReward};
use super::rewards_traits::{RewardRepositoryTrait, RewardServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::goals::{GoalError, GoalRepositoryTrait};

pub struct RewardService {
    reward_repo: Arc<dyn RewardRepositoryTrait>,
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl RewardService {
    pub fn new(
        reward_repo: Arc<dyn RewardRepositoryTrait>,
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            reward_repo,
            goal_repo,
            event_sink,
        }
    }
}

#[async_trait]
impl RewardServiceTrait for RewardService {
    async fn create_reward(&self, new_reward: NewNftReward) -> Result<NftReward> {
        if new_reward.recipient_address.trim().is_empty() {
            return Err(GoalError::InvalidInput("recipient address is required".to_string()).into());
        }
        if new_reward.transaction_hash.trim().is_empty() {
            return Err(GoalError::InvalidInput("transaction hash is required".to_string()).into());
        }
        if new_reward.token_id < 0 {
            return Err(GoalError::InvalidInput(format!(
                "token id must not be negative, got {}",
                new_reward.token_id
            ))
            .into());
        }

        let goal = self.goal_repo.get_goal(new_reward.goal_id.trim())?;
        if !goal.is_achieved {
            warn!("Refusing reward for goal {} which is not achieved", goal.id);
            return Err(GoalError::NotAchieved(goal.id).into());
        }

        let reward = NftReward {
            id: Uuid::new_v4().to_string(),
            goal_id: goal.id,
            recipient_address: new_reward.recipient_address.trim().to_string(),
            token_id: new_reward.token_id,
            transaction_hash: new_reward.transaction_hash.trim().to_string(),
            created_at: Utc::now(),
        };
        let reward = self.reward_repo.insert_reward(reward).await?;
        info!(
            "Recorded reward token {} for goal {} to {}",
            reward.token_id, reward.goal_id, reward.recipient_address
        );

        self.event_sink.emit(DomainEvent::reward_issued(
            reward.goal_id.clone(),
            reward.recipient_address.clone(),
            reward.token_id,
        ));
        Ok(reward)
    }

    fn get_reward(&self, reward_id: &str) -> Result<NftReward> {
        self.reward_repo.get_reward(reward_id)
    }

    fn get_rewards_by_goal(&self, goal_id: &str) -> Result<Vec<NftReward>> {
        self.reward_repo.load_rewards_by_goal(goal_id)
    }

    fn get_rewards_by_address(&self, address: &str) -> Result<Vec<NftReward>> {
        self.reward_repo.load_rewards_by_address(address)
    }
}
