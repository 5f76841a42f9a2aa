//! In-memory storage for contributions.

mod repository;

pub use repository::ContributionRepository;
