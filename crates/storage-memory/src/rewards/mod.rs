//! In-memory storage for achievement rewards.

mod repository;

pub use repository::RewardRepository;
