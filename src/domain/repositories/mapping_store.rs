//! Persistence contract for mappings.

use crate::domain::entities::{Mapping, NewMapping};
use async_trait::async_trait;
use std::time::Duration;

/// Errors raised by a [`MappingStore`] backend.
///
/// A store error is an infrastructure failure. The outcome of the failed call
/// is unknown, so callers surface it instead of guessing.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result of a conditional create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The code was free and the mapping is now durable.
    Created(Mapping),
    /// Another mapping already owns the code. Nothing was written.
    AlreadyExists,
}

/// Store of code to URL mappings.
///
/// The store is the only shared resource in the system and the only place
/// atomicity is required. It offers no update or delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingStore`] - In-process implementation
/// - [`crate::infrastructure::persistence::TimeoutMappingStore`] - Deadline decorator
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/store_postgres.rs`, `tests/concurrency.rs`,
/// and the unit tests in `memory_mapping_store.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Commits a mapping only if no mapping exists for its code.
    ///
    /// Must be atomic: when several callers race on the same code, exactly one
    /// observes [`CreateOutcome::Created`] and every other caller observes
    /// [`CreateOutcome::AlreadyExists`]. An existing mapping is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failure or timeout. In that case the
    /// caller cannot tell whether the write happened.
    async fn create_if_absent(&self, new_mapping: NewMapping) -> Result<CreateOutcome, StoreError>;

    /// Finds a mapping by its code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failure or timeout.
    async fn get(&self, code: &str) -> Result<Option<Mapping>, StoreError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
