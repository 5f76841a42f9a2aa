//! Rewards module - achievement NFTs mirrored from the savings contract.

mod rewards_model;
mod rewards_service;
mod rewards_traits;

#[cfg(test)]
mod rewards_service_tests;

pub use rewards_model::{NewNftReward, NftReward};
pub use rewards_service::RewardService;
pub use rewards_traits::{RewardRepositoryTrait, RewardServiceTrait};
