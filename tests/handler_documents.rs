mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use docdrop::api::handlers::create_document_handler;
use serde_json::json;

fn server(state: docdrop::state::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/v1/documents", post(create_document_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_document_success() {
    let ctx = common::create_test_state();
    let repositories = ctx.state.repositories.clone();
    let server = server(ctx.state);

    let response = server
        .post("/api/v1/documents")
        .json(&json!({
            "title": "Test Document",
            "content": "This is test content",
            "expiresIn": 3600
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], "test-id-001");
    assert_eq!(json["accessCode"], "AC000001");

    let code = repositories
        .access_codes
        .find_by_code("AC000001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(code.document_id(), "test-id-001");
    assert_eq!(
        code.expires_at(),
        Some(common::t0() + chrono::Duration::hours(1))
    );
}

#[tokio::test]
async fn test_create_document_without_expiration() {
    let ctx = common::create_test_state();
    let repositories = ctx.state.repositories.clone();
    let server = server(ctx.state);

    let response = server
        .post("/api/v1/documents")
        .json(&json!({
            "title": "Forever",
            "content": "Never expires"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let code = repositories
        .access_codes
        .find_by_code("AC000001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(code.expires_at(), None);
}

#[tokio::test]
async fn test_create_document_missing_title() {
    let ctx = common::create_test_state();
    let repositories = ctx.state.repositories.clone();
    let server = server(ctx.state);

    let response = server
        .post("/api/v1/documents")
        .json(&json!({ "content": "Body only" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["title"].is_array());

    assert_eq!(repositories.documents.count().await.unwrap(), 0);
    assert_eq!(repositories.access_codes.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_document_whitespace_title() {
    let ctx = common::create_test_state();
    let repositories = ctx.state.repositories.clone();
    let server = server(ctx.state);

    let response = server
        .post("/api/v1/documents")
        .json(&json!({ "title": "   ", "content": "Body" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Title cannot be empty");
    assert_eq!(repositories.documents.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_document_non_positive_expiration() {
    let ctx = common::create_test_state();
    let server = server(ctx.state);

    for expires_in in [0, -60] {
        let response = server
            .post("/api/v1/documents")
            .json(&json!({
                "title": "T",
                "content": "C",
                "expiresIn": expires_in
            }))
            .await;

        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_create_document_malformed_body() {
    let ctx = common::create_test_state();
    let server = server(ctx.state);

    let response = server
        .post("/api/v1/documents")
        .text("{ not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid request body");
}

#[tokio::test]
async fn test_create_document_codes_exhausted() {
    let ctx = common::create_test_state();
    let repositories = ctx.state.repositories.clone();
    let server = server(ctx.state);

    let response = server
        .post("/api/v1/documents")
        .json(&json!({ "title": "First", "content": "C" }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    ctx.codes.force_next_codes(vec!["AC000001"; 10]);

    let response = server
        .post("/api/v1/documents")
        .json(&json!({ "title": "Second", "content": "C" }))
        .await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "resource_exhausted");
    assert_eq!(repositories.documents.count().await.unwrap(), 2);
    assert_eq!(repositories.access_codes.count().await.unwrap(), 1);
}
