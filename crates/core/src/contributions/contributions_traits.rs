use async_trait::async_trait;

use crate::contributions::contributions_model::{
    Contribution, NewContribution, RecordedContribution,
};
use crate::errors::Result;
use crate::goals::Goal;

/// Computes the next state of a goal from its current state.
///
/// Runs while the store holds the goal's write lock, so it must not block.
pub type GoalMutation = Box<dyn FnOnce(&Goal) -> Result<Goal> + Send>;

/// Trait for contribution repository operations
#[async_trait]
pub trait ContributionRepositoryTrait: Send + Sync {
    fn get_contribution(&self, contribution_id: &str) -> Result<Contribution>;
    fn load_contributions(&self) -> Result<Vec<Contribution>>;
    fn load_contributions_by_goal(&self, goal_id: &str) -> Result<Vec<Contribution>>;
    /// Contributions whose contributor matches `address`, ignoring ASCII case.
    fn load_contributions_by_address(&self, address: &str) -> Result<Vec<Contribution>>;

    /// Stores `contribution` and the goal produced by `mutation` as one step.
    ///
    /// Implementations must serialize this read-modify-write per goal id so
    /// concurrent contributions to the same goal are never lost. If
    /// `mutation` fails nothing is stored.
    async fn record_contribution(
        &self,
        contribution: Contribution,
        mutation: GoalMutation,
    ) -> Result<RecordedContribution>;
}

/// Trait for contribution service operations
#[async_trait]
pub trait ContributionServiceTrait: Send + Sync {
    async fn record_contribution(
        &self,
        new_contribution: NewContribution,
    ) -> Result<RecordedContribution>;
    fn get_contribution(&self, contribution_id: &str) -> Result<Contribution>;
    fn get_contributions_by_goal(&self, goal_id: &str) -> Result<Vec<Contribution>>;
    fn get_contributions_by_address(&self, address: &str) -> Result<Vec<Contribution>>;
}
