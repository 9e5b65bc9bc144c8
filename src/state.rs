//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ResolutionService, ShorteningService};
use crate::domain::code_generator::CodeGenerator;
use crate::domain::repositories::MappingStore;

/// Process-wide handles built once at startup.
///
/// Cloning is cheap: every field is reference counted or small.
#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<ShorteningService<dyn MappingStore, dyn CodeGenerator>>,
    pub resolution_service: Arc<ResolutionService<dyn MappingStore>>,
    pub store: Arc<dyn MappingStore>,
    pub base_url: String,
}

impl AppState {
    /// Wires the services around a single shared store handle.
    pub fn new(
        store: Arc<dyn MappingStore>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
        max_attempts: usize,
    ) -> Self {
        Self {
            shortening_service: Arc::new(ShorteningService::new(
                store.clone(),
                generator,
                max_attempts,
            )),
            resolution_service: Arc::new(ResolutionService::new(store.clone())),
            store,
            base_url: base_url.into(),
        }
    }
}
