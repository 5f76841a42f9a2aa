//! Storage-specific error types for the in-memory store.
//!
//! These errors are internal to the storage layer and are converted to
//! `familysaver_core::Error` before being returned to callers.

use std::sync::PoisonError;

use familysaver_core::errors::{DatabaseError, Error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error("Lock poisoned while accessing {0}")]
    LockPoisoned(&'static str),

    #[error("Integrity violation: {0}")]
    Integrity(String),
}

impl StorageError {
    pub(crate) fn poisoned<T>(what: &'static str) -> impl FnOnce(PoisonError<T>) -> StorageError {
        move |_| StorageError::LockPoisoned(what)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(what) => Error::Database(DatabaseError::NotFound(what)),
            StorageError::Duplicate(what) => {
                Error::Database(DatabaseError::UniqueViolation(what))
            }
            e @ (StorageError::LockPoisoned(_) | StorageError::Integrity(_)) => {
                Error::Database(DatabaseError::Internal(e.to_string()))
            }
        }
    }
}
