//! Goals module - domain models, progress evaluation, services, and traits.

mod goals_errors;
mod goals_model;
mod goals_progress;
mod goals_service;
mod goals_traits;


pub use goals_errors::GoalError;
pub use goals_model::{
    Goal, GoalProgress, GoalSnapshot, GoalStats, GoalStatus, GoalUpdate, GoalWithProgress,
    LedgerGoalRecord, NewGoal,
};
pub use goals_progress::{apply_contribution, compute_progress, GoalEvaluator};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
