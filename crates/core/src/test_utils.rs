//! In-memory mock repositories shared by the service tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

use crate::contributions::{
    Contribution, ContributionRepositoryTrait, GoalMutation, RecordedContribution,
};
use crate::errors::{DatabaseError, Error, Result};
use crate::goals::{Goal, GoalRepositoryTrait, GoalUpdate};
use crate::rewards::{NftReward, RewardRepositoryTrait};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn sample_goal(id: &str, target: Decimal, saved: Decimal) -> Goal {
    Goal {
        id: id.to_string(),
        name: format!("Goal {id}"),
        description: None,
        target_amount: target,
        saved_amount: saved,
        deadline: fixed_now() + Duration::days(30),
        creator_address: "0xFamily".to_string(),
        is_achieved: false,
        contract_goal_id: None,
        duration_in_days: 60,
        created_at: fixed_now() - Duration::days(30),
    }
}

fn not_found(what: &str, id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!("{what} {id}")))
}

#[derive(Clone, Default)]
pub struct MockStore {
    pub goals: Arc<Mutex<Vec<Goal>>>,
    pub contributions: Arc<Mutex<Vec<Contribution>>>,
    pub rewards: Arc<Mutex<Vec<NftReward>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_goals(goals: Vec<Goal>) -> Self {
        let store = Self::new();
        *store.goals.lock().unwrap() = goals;
        store
    }

    pub fn add_contribution(&self, contribution: Contribution) {
        self.contributions.lock().unwrap().push(contribution);
    }

    pub fn add_reward(&self, reward: NftReward) {
        self.rewards.lock().unwrap().push(reward);
    }
}

#[async_trait]
impl GoalRepositoryTrait for MockStore {
    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.goals
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == goal_id)
            .cloned()
            .ok_or_else(|| not_found("goal", goal_id))
    }

    fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.goals.lock().unwrap().clone())
    }

    fn load_goals_by_creator(&self, creator_address: &str) -> Result<Vec<Goal>> {
        Ok(self
            .goals
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.is_created_by(creator_address))
            .cloned()
            .collect())
    }

    async fn insert_new_goal(&self, goal: Goal) -> Result<Goal> {
        self.goals.lock().unwrap().push(goal.clone());
        Ok(goal)
    }

    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal> {
        let mut goals = self.goals.lock().unwrap();
        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_update.id)
            .ok_or_else(|| not_found("goal", &goal_update.id))?;
        *goal = goal_update.apply_to(goal);
        Ok(goal.clone())
    }
}

#[async_trait]
impl ContributionRepositoryTrait for MockStore {
    fn get_contribution(&self, contribution_id: &str) -> Result<Contribution> {
        self.contributions
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == contribution_id)
            .cloned()
            .ok_or_else(|| not_found("contribution", contribution_id))
    }

    fn load_contributions(&self) -> Result<Vec<Contribution>> {
        Ok(self.contributions.lock().unwrap().clone())
    }

    fn load_contributions_by_goal(&self, goal_id: &str) -> Result<Vec<Contribution>> {
        Ok(self
            .contributions
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.goal_id == goal_id)
            .cloned()
            .collect())
    }

    fn load_contributions_by_address(&self, address: &str) -> Result<Vec<Contribution>> {
        Ok(self
            .contributions
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_from(address))
            .cloned()
            .collect())
    }

    async fn record_contribution(
        &self,
        contribution: Contribution,
        mutation: GoalMutation,
    ) -> Result<RecordedContribution> {
        let mut goals = self.goals.lock().unwrap();
        let goal = goals
            .iter_mut()
            .find(|g| g.id == contribution.goal_id)
            .ok_or_else(|| not_found("goal", &contribution.goal_id))?;

        let updated = mutation(&*goal)?;
        let newly_achieved = !goal.is_achieved && updated.is_achieved;
        *goal = updated.clone();
        self.contributions.lock().unwrap().push(contribution.clone());

        Ok(RecordedContribution {
            contribution,
            goal: updated,
            newly_achieved,
        })
    }
}

#[async_trait]
impl RewardRepositoryTrait for MockStore {
    fn get_reward(&self, reward_id: &str) -> Result<NftReward> {
        self.rewards
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == reward_id)
            .cloned()
            .ok_or_else(|| not_found("reward", reward_id))
    }

    fn load_rewards(&self) -> Result<Vec<NftReward>> {
        Ok(self.rewards.lock().unwrap().clone())
    }

    fn load_rewards_by_goal(&self, goal_id: &str) -> Result<Vec<NftReward>> {
        Ok(self
            .rewards
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.goal_id == goal_id)
            .cloned()
            .collect())
    }

    fn load_rewards_by_address(&self, address: &str) -> Result<Vec<NftReward>> {
        Ok(self
            .rewards
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_held_by(address))
            .cloned()
            .collect())
    }

    async fn insert_reward(&self, reward: NftReward) -> Result<NftReward> {
        let mut rewards = self.rewards.lock().unwrap();
        if rewards.iter().any(|r| r.token_id == reward.token_id) {
            return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                "token {}",
                reward.token_id
            ))));
        }
        rewards.push(reward.clone());
        Ok(reward)
    }
}
