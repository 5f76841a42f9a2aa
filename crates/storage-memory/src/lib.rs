//! In-memory record store for FamilySaver.
//!
//! Implements the repository traits defined in `familysaver-core` on top of
//! a single [`MemoryStore`] handle that callers create and share explicitly.
//!
//! ```text
//! core (domain, services)
//!          │  repository traits
//!          ▼
//!  storage-memory (this crate)
//!          │
//!          ▼
//!     MemoryStore
//! ```

pub mod contributions;
pub mod errors;
pub mod goals;
pub mod rewards;
pub mod store;

pub use contributions::ContributionRepository;
pub use errors::StorageError;
pub use goals::GoalRepository;
pub use rewards::RewardRepository;
pub use store::MemoryStore;

// Re-export from familysaver-core for convenience
pub use familysaver_core::errors::{DatabaseError, Error, Result};
