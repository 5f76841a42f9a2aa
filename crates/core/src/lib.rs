//! FamilySaver Core - goal domain entities, services, and traits.
//!
//! Goal balances and achievement live in an external savings contract; this
//! crate mirrors them. It holds the goal progress evaluator, the contribution
//! recorder, and the repository traits a record store implements (see the
//! `storage-memory` crate).

pub mod constants;
pub mod contributions;
pub mod errors;
pub mod events;
pub mod feed;
pub mod goals;
pub mod rewards;
pub mod settings;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export the evaluator entry points
pub use goals::{apply_contribution, compute_progress, GoalEvaluator};
pub use settings::GoalRules;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
