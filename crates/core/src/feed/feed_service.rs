use log::warn;
use std::collections::HashMap;
use std::sync::Arc;

use super::feed_model::{short_address, ActivityItem, ActivityKind};
use crate::constants::DEFAULT_ACTIVITY_LIMIT;
use crate::contributions::ContributionRepositoryTrait;
use crate::errors::Result;
use crate::goals::GoalRepositoryTrait;
use crate::rewards::RewardRepositoryTrait;

/// Builds the recent-activity feed from stored goals, contributions and
/// rewards.
pub struct FeedService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    contribution_repo: Arc<dyn ContributionRepositoryTrait>,
    reward_repo: Arc<dyn RewardRepositoryTrait>,
}

impl FeedService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        contribution_repo: Arc<dyn ContributionRepositoryTrait>,
        reward_repo: Arc<dyn RewardRepositoryTrait>,
    ) -> Self {
        Self {
            goal_repo,
            contribution_repo,
            reward_repo,
        }
    }

    /// Newest-first feed, truncated to `limit` (default 20).
    pub fn recent_activity(&self, limit: Option<usize>) -> Result<Vec<ActivityItem>> {
        let goals = self.goal_repo.load_goals()?;
        let goal_names: HashMap<&str, &str> = goals
            .iter()
            .map(|goal| (goal.id.as_str(), goal.name.as_str()))
            .collect();

        let mut items: Vec<ActivityItem> = goals
            .iter()
            .map(|goal| ActivityItem {
                id: goal.id.clone(),
                kind: ActivityKind::GoalCreated,
                goal_id: goal.id.clone(),
                goal_name: goal.name.clone(),
                actor_address: goal.creator_address.clone(),
                message: format!("New goal \"{}\" created", goal.name),
                amount: None,
                timestamp: goal.created_at,
            })
            .collect();

        for contribution in self.contribution_repo.load_contributions()? {
            let Some(goal_name) = goal_names.get(contribution.goal_id.as_str()) else {
                warn!(
                    "Contribution {} references unknown goal {}",
                    contribution.id, contribution.goal_id
                );
                continue;
            };
            items.push(ActivityItem {
                message: format!(
                    "{} contributed {} to goal \"{}\"",
                    short_address(&contribution.contributor_address),
                    contribution.amount,
                    goal_name
                ),
                id: contribution.id,
                kind: ActivityKind::Contribution,
                goal_id: contribution.goal_id,
                goal_name: goal_name.to_string(),
                actor_address: contribution.contributor_address,
                amount: Some(contribution.amount),
                timestamp: contribution.created_at,
            });
        }

        for reward in self.reward_repo.load_rewards()? {
            let Some(goal_name) = goal_names.get(reward.goal_id.as_str()) else {
                warn!("Reward {} references unknown goal {}", reward.id, reward.goal_id);
                continue;
            };
            items.push(ActivityItem {
                message: format!(
                    "Goal \"{}\" achieved and NFT reward #{} received",
                    goal_name, reward.token_id
                ),
                id: reward.id,
                kind: ActivityKind::Achievement,
                goal_id: reward.goal_id,
                goal_name: goal_name.to_string(),
                actor_address: reward.recipient_address,
                amount: None,
                timestamp: reward.created_at,
            });
        }

        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items.truncate(limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT));
        Ok(items)
    }
}
