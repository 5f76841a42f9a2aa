use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::contributions_model::{Contribution, NewContribution, RecordedContribution};
use super::contributions_traits::{ContributionRepositoryTrait, ContributionServiceTrait};
use crate::constants::AMOUNT_SCALE;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::goals::{Goal, GoalError, GoalEvaluator};

/// Records contributions and keeps the goal mirror in step with them.
pub struct ContributionService {
    contribution_repo: Arc<dyn ContributionRepositoryTrait>,
    evaluator: GoalEvaluator,
    event_sink: Arc<dyn DomainEventSink>,
}

impl ContributionService {
    pub fn new(
        contribution_repo: Arc<dyn ContributionRepositoryTrait>,
        evaluator: GoalEvaluator,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            contribution_repo,
            evaluator,
            event_sink,
        }
    }
}

fn validate_new_contribution(new: &NewContribution) -> std::result::Result<(), GoalError> {
    if new.amount <= Decimal::ZERO {
        return Err(GoalError::InvalidContributionAmount(format!(
            "contribution must be positive, got {}",
            new.amount
        )));
    }
    if new.amount.normalize().scale() > AMOUNT_SCALE {
        return Err(GoalError::InvalidContributionAmount(format!(
            "{} has more than {AMOUNT_SCALE} decimal places",
            new.amount
        )));
    }
    if new.goal_id.trim().is_empty() {
        return Err(GoalError::InvalidInput("goal id is required".to_string()));
    }
    if new.contributor_address.trim().is_empty() {
        return Err(GoalError::InvalidInput(
            "contributor address is required".to_string(),
        ));
    }
    if new.transaction_hash.trim().is_empty() {
        return Err(GoalError::InvalidInput(
            "transaction hash is required".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ContributionServiceTrait for ContributionService {
    async fn record_contribution(
        &self,
        new_contribution: NewContribution,
    ) -> Result<RecordedContribution> {
        validate_new_contribution(&new_contribution)?;

        let contribution = Contribution {
            id: Uuid::new_v4().to_string(),
            goal_id: new_contribution.goal_id.trim().to_string(),
            contributor_address: new_contribution.contributor_address.trim().to_string(),
            amount: new_contribution.amount,
            transaction_hash: new_contribution.transaction_hash.trim().to_string(),
            block_number: new_contribution.block_number,
            created_at: Utc::now(),
        };
        debug!(
            "Recording contribution of {} to goal {} from {}",
            contribution.amount, contribution.goal_id, contribution.contributor_address
        );

        let evaluator = self.evaluator;
        let amount = contribution.amount;
        let recorded = self
            .contribution_repo
            .record_contribution(
                contribution,
                Box::new(move |goal: &Goal| -> Result<Goal> {
                    Ok(evaluator.apply_contribution(goal, amount)?)
                }),
            )
            .await?;

        let mut events = vec![DomainEvent::contribution_recorded(
            recorded.goal.id.clone(),
            recorded.contribution.id.clone(),
            recorded.contribution.contributor_address.clone(),
            recorded.contribution.amount,
            recorded.goal.saved_amount,
        )];
        if recorded.newly_achieved {
            info!(
                "Goal {} achieved with {} saved of {}",
                recorded.goal.id, recorded.goal.saved_amount, recorded.goal.target_amount
            );
            events.push(DomainEvent::goal_achieved(
                recorded.goal.id.clone(),
                recorded.goal.saved_amount,
            ));
        }
        self.event_sink.emit_batch(events);

        Ok(recorded)
    }

    fn get_contribution(&self, contribution_id: &str) -> Result<Contribution> {
        self.contribution_repo.get_contribution(contribution_id)
    }

    fn get_contributions_by_goal(&self, goal_id: &str) -> Result<Vec<Contribution>> {
        self.contribution_repo.load_contributions_by_goal(goal_id)
    }

    fn get_contributions_by_address(&self, address: &str) -> Result<Vec<Contribution>> {
        self.contribution_repo.load_contributions_by_address(address)
    }
}
