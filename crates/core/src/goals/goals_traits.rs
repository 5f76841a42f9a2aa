use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalStats, GoalUpdate, GoalWithProgress, NewGoal};

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    fn load_goals(&self) -> Result<Vec<Goal>>;
    /// Goals whose creator matches `creator_address`, ignoring ASCII case.
    fn load_goals_by_creator(&self, creator_address: &str) -> Result<Vec<Goal>>;
    async fn insert_new_goal(&self, goal: Goal) -> Result<Goal>;
    /// Applies a metadata update atomically with respect to contributions on
    /// the same goal.
    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn get_goals_by_creator(&self, creator_address: &str) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal>;
    fn get_goals_with_progress(
        &self,
        creator_address: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<GoalWithProgress>>;
    fn get_goal_stats(&self, creator_address: Option<&str>) -> Result<GoalStats>;
}
