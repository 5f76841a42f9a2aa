use std::sync::Arc;

use rust_decimal_macros::dec;

use crate::errors::{DatabaseError, Error};
use crate::events::{DomainEvent, MockDomainEventSink};
use crate::goals::GoalError;
use crate::rewards::{NewNftReward, RewardService, RewardServiceTrait};
use crate::test_utils::{sample_goal, MockStore};

fn service(store: &MockStore, sink: &MockDomainEventSink) -> RewardService {
    RewardService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(sink.clone()),
    )
}

fn new_reward(goal_id: &str, token_id: i64) -> NewNftReward {
    NewNftReward {
        goal_id: goal_id.to_string(),
        recipient_address: "0xParent".to_string(),
        token_id,
        transaction_hash: format!("0xmint{token_id}"),
    }
}

fn store_with_achieved_goal() -> MockStore {
    let mut goal = sample_goal("g1", dec!(10), dec!(8));
    goal.is_achieved = true;
    MockStore::with_goals(vec![goal, sample_goal("g2", dec!(10), dec!(1))])
}

#[tokio::test]
async fn test_create_reward_for_achieved_goal() {
    let store = store_with_achieved_goal();
    let sink = MockDomainEventSink::new();
    let svc = service(&store, &sink);

    let reward = svc.create_reward(new_reward("g1", 3)).await.unwrap();

    assert_eq!(reward.goal_id, "g1");
    assert_eq!(reward.token_id, 3);
    assert_eq!(svc.get_rewards_by_goal("g1").unwrap(), vec![reward.clone()]);
    assert_eq!(svc.get_rewards_by_address("0xPARENT").unwrap().len(), 1);
    assert_eq!(svc.get_reward(&reward.id).unwrap(), reward);
    assert_eq!(
        sink.events(),
        vec![DomainEvent::reward_issued("g1".to_string(), "0xParent".to_string(), 3)]
    );
}

#[tokio::test]
async fn test_reward_requires_achieved_goal() {
    let store = store_with_achieved_goal();
    let sink = MockDomainEventSink::new();

    let result = service(&store, &sink).create_reward(new_reward("g2", 4)).await;

    assert!(matches!(result, Err(Error::Goal(GoalError::NotAchieved(id))) if id == "g2"));
    assert!(store.rewards.lock().unwrap().is_empty());
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_reward_for_unknown_goal() {
    let store = store_with_achieved_goal();
    let sink = MockDomainEventSink::new();

    let result = service(&store, &sink).create_reward(new_reward("g9", 4)).await;
    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_duplicate_token_is_rejected() {
    let store = store_with_achieved_goal();
    let sink = MockDomainEventSink::new();
    let svc = service(&store, &sink);

    svc.create_reward(new_reward("g1", 3)).await.unwrap();
    let result = svc.create_reward(new_reward("g1", 3)).await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::UniqueViolation(_)))
    ));
    assert_eq!(sink.len(), 1);
}

#[tokio::test]
async fn test_reward_input_validation() {
    let store = store_with_achieved_goal();
    let sink = MockDomainEventSink::new();
    let svc = service(&store, &sink);

    let mut no_recipient = new_reward("g1", 1);
    no_recipient.recipient_address = " ".to_string();
    assert!(svc.create_reward(no_recipient).await.is_err());

    assert!(matches!(
        svc.create_reward(new_reward("g1", -1)).await,
        Err(Error::Goal(GoalError::InvalidInput(_)))
    ));
}
