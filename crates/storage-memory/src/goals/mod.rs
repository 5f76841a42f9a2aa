//! In-memory storage for goals.

mod repository;

pub use repository::GoalRepository;
