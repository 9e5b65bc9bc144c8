#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shortlink::domain::code_generator::{CodeGenError, CodeGenerator};
use shortlink::domain::entities::{Mapping, NewMapping};
use shortlink::domain::repositories::{CreateOutcome, MappingStore, StoreError};
use shortlink::infrastructure::persistence::MemoryMappingStore;
use shortlink::routes::router;
use shortlink::state::AppState;
use shortlink::utils::code_generator::RandomCodeGenerator;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://s.example.com";

/// State backed by a fresh in-memory store and the production generator.
pub fn create_test_state() -> (AppState, Arc<MemoryMappingStore>) {
    let store = Arc::new(MemoryMappingStore::new());
    let state = AppState::new(
        store.clone(),
        Arc::new(RandomCodeGenerator::default()),
        BASE_URL,
        5,
    );

    (state, store)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn create_test_mapping(store: &dyn MappingStore, code: &str, url: &str) {
    let outcome = store
        .create_if_absent(NewMapping {
            code: code.to_string(),
            target_url: url.to_string(),
            created_at: chrono::Utc::now(),
        })
        .await
        .unwrap();

    assert!(matches!(outcome, CreateOutcome::Created(_)));
}

/// Generator that always returns the same code.
pub struct FixedCodeGenerator(pub String);

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> Result<String, CodeGenError> {
        Ok(self.0.clone())
    }
}

/// Generator that returns `first` once, then random codes.
pub struct FirstThenRandom {
    first: Mutex<Option<String>>,
    random: RandomCodeGenerator,
}

impl FirstThenRandom {
    pub fn new(first: &str) -> Self {
        Self {
            first: Mutex::new(Some(first.to_string())),
            random: RandomCodeGenerator::default(),
        }
    }
}

impl CodeGenerator for FirstThenRandom {
    fn generate(&self) -> Result<String, CodeGenError> {
        match self.first.lock().unwrap().take() {
            Some(code) => Ok(code),
            None => self.random.generate(),
        }
    }
}

/// Store that fails every call with a detailed backend message.
pub struct FailingStore;

pub const FAILING_STORE_DETAIL: &str = "FATAL: password authentication failed for user \"app\"";

#[async_trait]
impl MappingStore for FailingStore {
    async fn create_if_absent(&self, _: NewMapping) -> Result<CreateOutcome, StoreError> {
        Err(StoreError::Backend(FAILING_STORE_DETAIL.to_string()))
    }

    async fn get(&self, _: &str) -> Result<Option<Mapping>, StoreError> {
        Err(StoreError::Backend(FAILING_STORE_DETAIL.to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Backend(FAILING_STORE_DETAIL.to_string()))
    }
}
