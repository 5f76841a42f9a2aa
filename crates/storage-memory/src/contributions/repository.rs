use async_trait::async_trait;
use familysaver_core::contributions::{
    Contribution, ContributionRepositoryTrait, GoalMutation, RecordedContribution,
};
use familysaver_core::Result;
use log::debug;
use std::sync::Arc;

use crate::errors::StorageError;
use crate::store::MemoryStore;

pub struct ContributionRepository {
    store: Arc<MemoryStore>,
}

impl ContributionRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        ContributionRepository { store }
    }

    fn filtered<F>(&self, predicate: F) -> Result<Vec<Contribution>>
    where
        F: Fn(&Contribution) -> bool,
    {
        Ok(self
            .store
            .contributions()?
            .iter()
            .filter(|c| predicate(c))
            .cloned()
            .collect())
    }

    /// Runs the goal update under the goal lock and appends the contribution.
    fn apply_locked(
        &self,
        contribution: Contribution,
        mutation: GoalMutation,
    ) -> Result<RecordedContribution> {
        let cell = self.store.goal_cell(&contribution.goal_id)?;
        let mut goal = MemoryStore::lock_goal(&cell)?;

        let updated = mutation(&*goal)?;
        if updated.id != goal.id {
            return Err(StorageError::Integrity(format!(
                "contribution {} rewrote goal {} as {}",
                contribution.id, goal.id, updated.id
            ))
            .into());
        }

        let newly_achieved = !goal.is_achieved && updated.is_achieved;
        self.store.contributions_mut()?.push(contribution.clone());
        *goal = updated.clone();

        Ok(RecordedContribution {
            contribution,
            goal: updated,
            newly_achieved,
        })
    }
}

#[async_trait]
impl ContributionRepositoryTrait for ContributionRepository {
    fn get_contribution(&self, contribution_id: &str) -> Result<Contribution> {
        self.filtered(|c| c.id == contribution_id)?
            .into_iter()
            .next()
            .ok_or_else(|| StorageError::NotFound(format!("Contribution {contribution_id}")).into())
    }

    fn load_contributions(&self) -> Result<Vec<Contribution>> {
        self.filtered(|_| true)
    }

    fn load_contributions_by_goal(&self, goal_id: &str) -> Result<Vec<Contribution>> {
        self.filtered(|c| c.goal_id == goal_id)
    }

    fn load_contributions_by_address(&self, address: &str) -> Result<Vec<Contribution>> {
        self.filtered(|c| c.is_from(address))
    }

    async fn record_contribution(
        &self,
        contribution: Contribution,
        mutation: GoalMutation,
    ) -> Result<RecordedContribution> {
        let hash = contribution.transaction_hash.clone();
        self.store.claim_hash(&hash, &contribution.id)?;

        match self.apply_locked(contribution, mutation) {
            Ok(recorded) => {
                debug!(
                    "Goal {} saved amount is now {}",
                    recorded.goal.id, recorded.goal.saved_amount
                );
                Ok(recorded)
            }
            Err(e) => {
                self.store.release_hash(&hash);
                Err(e)
            }
        }
    }
}
