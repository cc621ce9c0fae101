mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::Duration;
use docdrop::api::handlers::get_document_handler;
use docdrop::application::use_cases::CreateDocumentInput;
use docdrop::domain::entities::AccessCode;

fn server(state: docdrop::state::AppState) -> TestServer {
    let app = Router::new()
        .route("/public/{access_code}", get(get_document_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

async fn create(ctx: &common::TestContext, expires_in: Option<i64>) -> String {
    ctx.state
        .create_document
        .execute(CreateDocumentInput {
            title: "Test Document".to_string(),
            content: "This is test content".to_string(),
            expires_in,
        })
        .await
        .unwrap()
        .access_code
}

#[tokio::test]
async fn test_get_document_success() {
    let ctx = common::create_test_state();
    let code = create(&ctx, None).await;
    let server = server(ctx.state.clone());

    let response = server.get(&format!("/public/{}", code)).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["title"], "Test Document");
    assert_eq!(json["content"], "This is test content");
    assert_eq!(json["createdAt"], "2025-01-01T10:00:00.000Z");
}

#[tokio::test]
async fn test_get_document_unknown_code() {
    let ctx = common::create_test_state();
    let server = server(ctx.state);

    let response = server.get("/public/UNKNOWN").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Access code not found");
}

#[tokio::test]
async fn test_get_document_expired_code() {
    let ctx = common::create_test_state();
    let code = create(&ctx, Some(3600)).await;
    let server = server(ctx.state.clone());

    ctx.clock.advance(Duration::seconds(3600));
    server
        .get(&format!("/public/{}", code))
        .await
        .assert_status_ok();

    ctx.clock.advance(Duration::seconds(1));
    let response = server.get(&format!("/public/{}", code)).await;

    response.assert_status(StatusCode::GONE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "expired");
}

#[tokio::test]
async fn test_get_document_orphaned_code() {
    let ctx = common::create_test_state();
    ctx.state
        .repositories
        .access_codes
        .save(AccessCode::new("ORPHAN", "missing-doc", None).unwrap())
        .await
        .unwrap();
    let server = server(ctx.state);

    let response = server.get("/public/ORPHAN").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Document not found");
}
