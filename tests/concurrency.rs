//! Concurrent creation against a shared store.
//!
//! Runs on the in-memory store so the suite needs no database; the PostgreSQL
//! store gets the same race in `store_postgres.rs`.

mod common;

use chrono::Utc;
use shortlink::application::services::{Resolution, ResolutionService, ShorteningService};
use shortlink::domain::entities::NewMapping;
use shortlink::domain::repositories::{CreateOutcome, MappingStore};
use shortlink::infrastructure::persistence::MemoryMappingStore;
use shortlink::utils::code_generator::RandomCodeGenerator;
use std::collections::HashSet;
use std::sync::Arc;

const TASKS: usize = 32;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_forced_collisions_all_succeed_with_distinct_codes() {
    let store = Arc::new(MemoryMappingStore::new());

    let mut handles = Vec::with_capacity(TASKS);
    for i in 0..TASKS {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            // Every task's first candidate is the same code.
            let service = ShorteningService::new(
                store,
                Arc::new(common::FirstThenRandom::new("SAME000")),
                5,
            );
            let url = format!("https://example.com/page/{i}");
            let created = service.shorten(&url, common::BASE_URL).await.unwrap();
            (created.code, url)
        }));
    }

    let mut results = Vec::with_capacity(TASKS);
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    let winners = results.iter().filter(|(code, _)| code == "SAME000").count();
    assert_eq!(winners, 1);

    let codes: HashSet<_> = results.iter().map(|(code, _)| code.clone()).collect();
    assert_eq!(codes.len(), TASKS);
    assert_eq!(store.len().await, TASKS);

    // Each caller's code resolves to that caller's URL.
    for (code, url) in &results {
        let mapping = store.get(code).await.unwrap().unwrap();
        assert_eq!(&mapping.target_url, url);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_create_if_absent_has_single_winner() {
    let store = Arc::new(MemoryMappingStore::new());

    let mut handles = Vec::with_capacity(TASKS);
    for i in 0..TASKS {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .create_if_absent(NewMapping {
                    code: "race001".to_string(),
                    target_url: format!("https://example.com/{i}"),
                    created_at: Utc::now(),
                })
                .await
                .unwrap()
        }));
    }

    let mut winner_url = None;
    let mut losers = 0;
    for handle in handles {
        match handle.await.unwrap() {
            CreateOutcome::Created(mapping) => {
                assert!(winner_url.is_none(), "more than one creation succeeded");
                winner_url = Some(mapping.target_url);
            }
            CreateOutcome::AlreadyExists => losers += 1,
        }
    }

    assert_eq!(losers, TASKS - 1);

    let stored = store.get("race001").await.unwrap().unwrap();
    assert_eq!(Some(stored.target_url), winner_url);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_shortens_produce_unique_codes() {
    let store = Arc::new(MemoryMappingStore::new());
    let service = Arc::new(ShorteningService::new(
        store.clone(),
        Arc::new(RandomCodeGenerator::default()),
        5,
    ));

    let mut handles = Vec::new();
    for worker in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let mut codes = Vec::new();
            for i in 0..250 {
                let url = format!("https://example.com/{worker}/{i}");
                codes.push(service.shorten(&url, common::BASE_URL).await.unwrap().code);
            }
            codes
        }));
    }

    let mut all = HashSet::new();
    for handle in handles {
        for code in handle.await.unwrap() {
            assert!(all.insert(code), "duplicate code handed out");
        }
    }

    assert_eq!(all.len(), 2000);
    assert_eq!(store.len().await, 2000);
}

#[tokio::test]
async fn test_created_code_resolves_to_submitted_url() {
    let store = Arc::new(MemoryMappingStore::new());
    let shortening = ShorteningService::new(
        store.clone(),
        Arc::new(RandomCodeGenerator::default()),
        5,
    );
    let resolution = ResolutionService::new(store.clone());

    let created = shortening
        .shorten("http://example.org/a?b=c", common::BASE_URL)
        .await
        .unwrap();

    assert_eq!(
        resolution.resolve(&created.code).await.unwrap(),
        Resolution::Redirect("http://example.org/a?b=c".to_string())
    );
    assert_eq!(
        resolution.resolve("zzzzzzz").await.unwrap(),
        Resolution::NotFound
    );
}
