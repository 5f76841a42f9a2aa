use thiserror::Error;

/// Validation failures raised by goal evaluation and goal services.
///
/// All of these are local, synchronous input errors. None of them is worth
/// retrying with the same input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    #[error("Invalid goal data: {0}")]
    InvalidGoalData(String),

    #[error("Invalid contribution amount: {0}")]
    InvalidContributionAmount(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Goal {0} has not been achieved")]
    NotAchieved(String),
}
