//! In-process implementation of the mapping store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{CreateOutcome, MappingStore, StoreError};

/// A mapping store held in process memory.
///
/// Conditional creates take the write lock and go through the `HashMap` entry
/// API, so racing creates for the same code are serialized and only the first
/// one finds the slot vacant.
///
/// # Use Cases
///
/// - Development environments without PostgreSQL (`STORE_BACKEND=memory`)
/// - Handler and service tests
///
/// Contents are lost on restart.
#[derive(Default)]
pub struct MemoryMappingStore {
    mappings: RwLock<HashMap<String, Mapping>>,
}

impl MemoryMappingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryMappingStore (mappings are not persisted)");
        Self::default()
    }

    /// Returns the number of stored mappings.
    pub async fn len(&self) -> usize {
        self.mappings.read().await.len()
    }

    /// Returns true if no mapping has been stored.
    pub async fn is_empty(&self) -> bool {
        self.mappings.read().await.is_empty()
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn create_if_absent(&self, new_mapping: NewMapping) -> Result<CreateOutcome, StoreError> {
        let mut mappings = self.mappings.write().await;

        match mappings.entry(new_mapping.code.clone()) {
            Entry::Occupied(_) => Ok(CreateOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                let mapping = Mapping::from(new_mapping);
                slot.insert(mapping.clone());
                Ok(CreateOutcome::Created(mapping))
            }
        }
    }

    async fn get(&self, code: &str) -> Result<Option<Mapping>, StoreError> {
        Ok(self.mappings.read().await.get(code).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn new_mapping(code: &str, url: &str) -> NewMapping {
        NewMapping {
            code: code.to_string(),
            target_url: url.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = MemoryMappingStore::new();

        let outcome = store
            .create_if_absent(new_mapping("abc1234", "https://example.com"))
            .await
            .unwrap();
        assert!(matches!(outcome, CreateOutcome::Created(ref m) if m.code == "abc1234"));

        let found = store.get("abc1234").await.unwrap().unwrap();
        assert_eq!(found.target_url, "https://example.com");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_existing_code_does_not_overwrite() {
        let store = MemoryMappingStore::new();
        store
            .create_if_absent(new_mapping("abc1234", "https://first.com"))
            .await
            .unwrap();

        let outcome = store
            .create_if_absent(new_mapping("abc1234", "https://second.com"))
            .await
            .unwrap();

        assert_eq!(outcome, CreateOutcome::AlreadyExists);
        let found = store.get("abc1234").await.unwrap().unwrap();
        assert_eq!(found.target_url, "https://first.com");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = MemoryMappingStore::new();
        assert!(store.get("nothing").await.unwrap().is_none());
        assert!(store.is_empty().await);
    }
}
