use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::goals_errors::GoalError;
use super::goals_model::{Goal, GoalStats, GoalUpdate, GoalWithProgress, NewGoal};
use super::goals_progress::GoalEvaluator;
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::constants::AMOUNT_SCALE;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::utils::time_utils::{days_remaining, deadline_after};

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    evaluator: GoalEvaluator,
    event_sink: Arc<dyn DomainEventSink>,
}

impl GoalService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        evaluator: GoalEvaluator,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        GoalService {
            goal_repo,
            evaluator,
            event_sink,
        }
    }

    fn scoped_goals(&self, creator_address: Option<&str>) -> Result<Vec<Goal>> {
        match creator_address {
            Some(address) => self.goal_repo.load_goals_by_creator(address),
            None => self.goal_repo.load_goals(),
        }
    }
}

/// Checks a new goal before it is stored.
fn validate_new_goal(new_goal: &NewGoal) -> std::result::Result<(), GoalError> {
    if new_goal.name.trim().is_empty() {
        return Err(GoalError::InvalidInput("goal name cannot be empty".to_string()));
    }
    if new_goal.target_amount <= Decimal::ZERO {
        return Err(GoalError::InvalidGoalData(format!(
            "target amount must be greater than 0, got {}",
            new_goal.target_amount
        )));
    }
    if new_goal.target_amount.normalize().scale() > AMOUNT_SCALE {
        return Err(GoalError::InvalidGoalData(format!(
            "target amount {} has more than {AMOUNT_SCALE} decimal places",
            new_goal.target_amount
        )));
    }
    if new_goal.duration_in_days <= 0 {
        return Err(GoalError::InvalidInput(
            "duration must be greater than 0 days".to_string(),
        ));
    }
    if new_goal.creator_address.trim().is_empty() {
        return Err(GoalError::InvalidInput(
            "creator address is required".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.goal_repo.get_goal(goal_id)
    }

    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    fn get_goals_by_creator(&self, creator_address: &str) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals_by_creator(creator_address)
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        validate_new_goal(&new_goal)?;

        let created_at = Utc::now();
        let deadline = deadline_after(created_at, new_goal.duration_in_days).ok_or_else(|| {
            GoalError::InvalidInput(format!(
                "duration of {} days is out of range",
                new_goal.duration_in_days
            ))
        })?;

        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            name: new_goal.name.trim().to_string(),
            description: new_goal.description,
            target_amount: new_goal.target_amount,
            saved_amount: Decimal::ZERO,
            deadline,
            creator_address: new_goal.creator_address.trim().to_string(),
            is_achieved: false,
            contract_goal_id: new_goal.contract_goal_id,
            duration_in_days: new_goal.duration_in_days,
            created_at,
        };

        let goal = self.goal_repo.insert_new_goal(goal).await?;
        info!(
            "Created goal {} for {} (target {}, deadline {})",
            goal.id, goal.creator_address, goal.target_amount, goal.deadline
        );

        self.event_sink.emit(DomainEvent::goal_created(
            goal.id.clone(),
            goal.creator_address.clone(),
            goal.deadline,
        ));
        Ok(goal)
    }

    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal> {
        if let Some(name) = &goal_update.name {
            if name.trim().is_empty() {
                return Err(GoalError::InvalidInput("goal name cannot be empty".to_string()).into());
            }
        }
        debug!("Updating goal {}", goal_update.id);
        self.goal_repo.update_goal(goal_update).await
    }

    fn get_goals_with_progress(
        &self,
        creator_address: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<GoalWithProgress>> {
        self.scoped_goals(creator_address)?
            .into_iter()
            .map(|goal| -> Result<GoalWithProgress> {
                let progress = self.evaluator.compute_progress(&goal.snapshot(), now)?;
                Ok(GoalWithProgress {
                    days_remaining: days_remaining(goal.deadline, now),
                    progress: progress.progress_percentage,
                    status: progress.status,
                    goal,
                })
            })
            .collect()
    }

    fn get_goal_stats(&self, creator_address: Option<&str>) -> Result<GoalStats> {
        let goals = self.scoped_goals(creator_address)?;
        let total_saved = goals
            .iter()
            .try_fold(Decimal::ZERO, |sum, goal| sum.checked_add(goal.saved_amount))
            .ok_or_else(|| {
                GoalError::InvalidGoalData("total saved amount overflows".to_string())
            })?;
        let completed_goals = goals.iter().filter(|goal| goal.is_achieved).count();

        Ok(GoalStats {
            total_goals: goals.len(),
            total_saved,
            completed_goals,
            // The contract mints one reward per achieved goal.
            nft_rewards: completed_goals,
        })
    }
}
