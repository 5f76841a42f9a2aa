use std::sync::Arc;

use chrono::Duration;
use rust_decimal_macros::dec;

use crate::contributions::Contribution;
use crate::feed::{ActivityKind, FeedService};
use crate::rewards::NftReward;
use crate::test_utils::{fixed_now, sample_goal, MockStore};

fn contribution(id: &str, goal_id: &str, hours_ago: i64) -> Contribution {
    Contribution {
        id: id.to_string(),
        goal_id: goal_id.to_string(),
        contributor_address: "0x52908400098527886E0F7030069857D2E4169EE7".to_string(),
        amount: dec!(0.5),
        transaction_hash: format!("0x{id}"),
        block_number: None,
        created_at: fixed_now() - Duration::hours(hours_ago),
    }
}

fn feed(store: &MockStore) -> FeedService {
    FeedService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    )
}

#[test]
fn test_feed_is_newest_first() {
    let mut car = sample_goal("g1", dec!(10), dec!(8));
    car.name = "New Family Car".to_string();
    car.created_at = fixed_now() - Duration::days(3);
    let store = MockStore::with_goals(vec![car]);
    store.add_contribution(contribution("c1", "g1", 2));
    store.add_reward(NftReward {
        id: "r1".to_string(),
        goal_id: "g1".to_string(),
        recipient_address: "0xFamily".to_string(),
        token_id: 11,
        transaction_hash: "0xmint".to_string(),
        created_at: fixed_now() - Duration::hours(1),
    });

    let items = feed(&store).recent_activity(None).unwrap();

    let kinds: Vec<ActivityKind> = items.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ActivityKind::Achievement,
            ActivityKind::Contribution,
            ActivityKind::GoalCreated
        ]
    );
    assert_eq!(
        items[1].message,
        "0x5290...9EE7 contributed 0.5 to goal \"New Family Car\""
    );
    assert_eq!(items[1].amount, Some(dec!(0.5)));
    assert_eq!(items[2].message, "New goal \"New Family Car\" created");
}

#[test]
fn test_feed_respects_limit() {
    let store = MockStore::with_goals(vec![sample_goal("g1", dec!(10), dec!(0))]);
    for hours in 0..30 {
        store.add_contribution(contribution(&format!("c{hours}"), "g1", hours));
    }

    assert_eq!(feed(&store).recent_activity(None).unwrap().len(), 20);
    let items = feed(&store).recent_activity(Some(3)).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].id, "c0");
}

#[test]
fn test_feed_skips_orphaned_records() {
    let store = MockStore::new();
    store.add_contribution(contribution("c1", "ghost", 1));

    assert!(feed(&store).recent_activity(None).unwrap().is_empty());
}
