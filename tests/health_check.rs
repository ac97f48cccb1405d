mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use bayfront_site::config::RecaptchaSettings;
use bayfront_site::services::{
    KnowledgeBase, MockEmailProvider, NotificationDispatcher, RecaptchaVerifier,
};
use bayfront_site::startup::{AppState, build_router};
use common::TestApp;
use reqwest::Client;
use std::sync::Arc;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, serde_json::json!({ "name": "Cloudflare" }));
}

// =============================================================================
// Router tests without a network listener
// =============================================================================

fn router() -> axum::Router {
    let state = AppState {
        knowledge: Arc::new(KnowledgeBase::new()),
        verifier: Arc::new(RecaptchaVerifier::new(RecaptchaSettings::default())),
        dispatcher: Arc::new(NotificationDispatcher::new(
            Arc::new(MockEmailProvider::new(false)),
            None,
            None,
        )),
    };
    build_router(state, "tests/fixtures/public")
}

#[tokio::test]
async fn health_probe_answers_in_process() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "name": "Cloudflare" }));
}

#[tokio::test]
async fn api_path_without_trailing_slash_falls_through_to_assets() {
    // "/api" is not a registered route; it goes to the asset fallback and
    // misses.
    let response = router()
        .oneshot(Request::builder().uri("/api").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn estimate_route_rejects_get() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/estimate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
