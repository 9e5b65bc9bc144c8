mod common;

use shortlink::state::AppState;
use shortlink::utils::code_generator::RandomCodeGenerator;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let state = AppState::new(
        Arc::new(common::FailingStore),
        Arc::new(RandomCodeGenerator::default()),
        common::BASE_URL,
        5,
    );
    let server = common::test_server(state);

    let response = server.get("/health").await;

    response.assert_status_service_unavailable();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
    assert!(!response.text().contains("password"));
}
