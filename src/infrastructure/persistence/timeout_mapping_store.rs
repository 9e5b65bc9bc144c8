//! Deadline decorator for mapping stores.

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{CreateOutcome, MappingStore, StoreError};

/// Bounds every call to the wrapped store by a fixed timeout.
///
/// An expired call yields [`StoreError::Timeout`]. It is never reported as
/// [`CreateOutcome::AlreadyExists`]: the write may or may not have happened.
pub struct TimeoutMappingStore<S: MappingStore + ?Sized> {
    inner: Arc<S>,
    timeout: Duration,
}

impl<S: MappingStore + ?Sized> TimeoutMappingStore<S> {
    /// Wraps `inner` so each call is bounded by `timeout`.
    pub fn new(inner: Arc<S>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, StoreError>> + Send,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!(operation, timeout_ms = self.timeout.as_millis() as u64, "Store call timed out");
                Err(StoreError::Timeout(self.timeout))
            }
        }
    }
}

#[async_trait]
impl<S: MappingStore + ?Sized> MappingStore for TimeoutMappingStore<S> {
    async fn create_if_absent(&self, new_mapping: NewMapping) -> Result<CreateOutcome, StoreError> {
        self.bounded("create_if_absent", self.inner.create_if_absent(new_mapping))
            .await
    }

    async fn get(&self, code: &str) -> Result<Option<Mapping>, StoreError> {
        self.bounded("get", self.inner.get(code)).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.bounded("ping", self.inner.ping()).await
    }
}
