//! Goal progress and achievement evaluation.
//!
//! Everything here is pure: callers pass the goal state and the reference
//! time explicitly and get a fresh value back. Persisting an updated goal is
//! the caller's job.

use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::goals_errors::GoalError;
use super::goals_model::{Goal, GoalProgress, GoalSnapshot, GoalStatus};
use crate::settings::GoalRules;
use crate::utils::time_utils::days_remaining;

type Result<T> = std::result::Result<T, GoalError>;

/// Evaluates goal progress under a fixed set of rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalEvaluator {
    rules: GoalRules,
}

impl GoalEvaluator {
    pub fn new(rules: GoalRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &GoalRules {
        &self.rules
    }

    /// Progress percentage and lifecycle status of `goal` at `now`.
    ///
    /// Status precedence is fixed: achieved, then expired, then near
    /// deadline, then active.
    pub fn compute_progress(&self, goal: &GoalSnapshot, now: DateTime<Utc>) -> Result<GoalProgress> {
        let progress_percentage = progress_percentage(goal)?;

        let status = if goal.is_achieved {
            GoalStatus::Achieved
        } else if now > goal.deadline {
            GoalStatus::Expired
        } else if days_remaining(goal.deadline, now) <= self.rules.near_deadline_days {
            GoalStatus::NearDeadline
        } else {
            GoalStatus::Active
        };

        Ok(GoalProgress {
            progress_percentage,
            status,
        })
    }

    /// Adds `amount` to the goal's savings and latches the achieved flag.
    ///
    /// Only `saved_amount` and `is_achieved` can change. Once achieved, a goal
    /// stays achieved.
    pub fn apply_contribution(&self, goal: &Goal, amount: Decimal) -> Result<Goal> {
        if amount <= Decimal::ZERO {
            return Err(GoalError::InvalidContributionAmount(format!(
                "contribution must be positive, got {amount}"
            )));
        }
        validate_target(goal.target_amount)?;

        let saved_amount = goal.saved_amount.checked_add(amount).ok_or_else(|| {
            GoalError::InvalidContributionAmount(format!(
                "contribution of {amount} overflows saved amount {}",
                goal.saved_amount
            ))
        })?;

        let threshold_amount = goal
            .target_amount
            .checked_mul(self.rules.achievement_threshold)
            .ok_or_else(|| overflow("achievement threshold"))?;

        let mut updated = goal.clone();
        updated.saved_amount = saved_amount;
        updated.is_achieved = goal.is_achieved || saved_amount >= threshold_amount;
        Ok(updated)
    }
}

/// `compute_progress` under the default rules.
pub fn compute_progress(goal: &GoalSnapshot, now: DateTime<Utc>) -> Result<GoalProgress> {
    GoalEvaluator::default().compute_progress(goal, now)
}

/// `apply_contribution` under the default rules.
pub fn apply_contribution(goal: &Goal, amount: Decimal) -> Result<Goal> {
    GoalEvaluator::default().apply_contribution(goal, amount)
}

/// `round(100 * saved / target)`, half-up, unclamped.
fn progress_percentage(goal: &GoalSnapshot) -> Result<u64> {
    validate_target(goal.target_amount)?;
    if goal.saved_amount < Decimal::ZERO {
        return Err(GoalError::InvalidGoalData(format!(
            "saved amount must not be negative, got {}",
            goal.saved_amount
        )));
    }

    let ratio = goal
        .saved_amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(goal.target_amount))
        .ok_or_else(|| overflow("progress percentage"))?;

    ratio
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .ok_or_else(|| overflow("progress percentage"))
}

fn validate_target(target_amount: Decimal) -> Result<()> {
    if target_amount <= Decimal::ZERO {
        return Err(GoalError::InvalidGoalData(format!(
            "target amount must be positive, got {target_amount}"
        )));
    }
    Ok(())
}

fn overflow(what: &str) -> GoalError {
    GoalError::InvalidGoalData(format!("{what} is out of the representable range"))
}
