//! Code resolution service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::repositories::{MappingStore, StoreError};
use crate::utils::code_generator::is_well_formed;

/// Outcome of resolving a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The code exists; redirect to this target.
    Redirect(String),
    /// No mapping exists for the code.
    NotFound,
}

/// Service for resolving codes to their target URLs.
///
/// Performs at most one store read per call and never writes.
pub struct ResolutionService<S: MappingStore + ?Sized> {
    store: Arc<S>,
}

impl<S: MappingStore + ?Sized> ResolutionService<S> {
    /// Creates a new resolution service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves `code` to its redirect target.
    ///
    /// A structurally invalid code resolves to [`Resolution::NotFound`]
    /// without contacting the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on store failure or timeout.
    pub async fn resolve(&self, code: &str) -> Result<Resolution, StoreError> {
        if !is_well_formed(code) {
            debug!("Malformed code, skipping lookup");
            return Ok(Resolution::NotFound);
        }

        Ok(match self.store.get(code).await? {
            Some(mapping) => Resolution::Redirect(mapping.target_url),
            None => Resolution::NotFound,
        })
    }
}
