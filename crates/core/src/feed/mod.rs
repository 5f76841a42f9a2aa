//! Activity feed - recent goal creations, contributions and achievements.

mod feed_model;
mod feed_service;

#[cfg(test)]
mod feed_service_tests;

pub use feed_model::{short_address, ActivityItem, ActivityKind};
pub use feed_service::FeedService;
