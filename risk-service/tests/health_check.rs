mod common;

use common::{json_body, TestApp};
use reqwest::StatusCode;
use risk_service::handlers::home::HOME_MESSAGE;

#[tokio::test]
async fn home_returns_status_message() {
    let app = TestApp::spawn().await;

    let (status, body) = json_body(app.get("/").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "message": HOME_MESSAGE }));
}

#[tokio::test]
async fn health_check_reports_model() {
    let (app, _) = TestApp::spawn_with_label(0).await;

    let (status, body) = json_body(app.get("/health").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "risk-service");
    assert_eq!(body["model_type"], "fixed");
    assert_eq!(body["model_source"], "test");
    assert!(body["model_loaded_at"].is_string());
}

#[tokio::test]
async fn health_check_reports_artifact_path() {
    let app = TestApp::spawn().await;

    let (_, body) = json_body(app.get("/health").await).await;

    assert_eq!(body["model_type"], "decision_tree");
    assert!(body["model_source"]
        .as_str()
        .unwrap()
        .ends_with("covid_risk_model.json"));
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestApp::spawn().await;

    let response = app.get("/ready").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = TestApp::spawn().await;

    let (status, body) = json_body(app.get("/.well-known/openapi.json").await).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/predict"]["post"].is_object());
    assert!(body["paths"]["/"]["get"].is_object());
    assert!(body["components"]["schemas"]["ErrorResponse"].is_object());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::spawn().await;

    let (status, body) = json_body(app.get("/nope").await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = TestApp::spawn().await;

    let response = app.get("/").await;

    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
}
