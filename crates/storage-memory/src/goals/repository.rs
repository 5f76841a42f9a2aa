use async_trait::async_trait;
use familysaver_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate};
use familysaver_core::Result;
use log::debug;
use std::sync::Arc;

use crate::errors::StorageError;
use crate::store::MemoryStore;

pub struct GoalRepository {
    store: Arc<MemoryStore>,
}

impl GoalRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        GoalRepository { store }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        Ok(self.store.read_goal(goal_id)?)
    }

    fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.store.all_goals()?)
    }

    fn load_goals_by_creator(&self, creator_address: &str) -> Result<Vec<Goal>> {
        Ok(self
            .store
            .all_goals()?
            .into_iter()
            .filter(|goal| goal.is_created_by(creator_address))
            .collect())
    }

    async fn insert_new_goal(&self, goal: Goal) -> Result<Goal> {
        self.store.insert_goal(goal.clone())?;
        debug!("Stored goal {}", goal.id);
        Ok(goal)
    }

    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal> {
        let cell = self.store.goal_cell(&goal_update.id)?;
        let mut goal = MemoryStore::lock_goal(&cell)?;
        let updated = goal_update.apply_to(&goal);
        if updated.id != goal.id {
            return Err(StorageError::Integrity(format!(
                "update for goal {} changed its id",
                goal.id
            ))
            .into());
        }
        *goal = updated.clone();
        Ok(updated)
    }
}
