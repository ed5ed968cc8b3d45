mod common;

use common::{TestApp, VALID_BODY};
use reqwest::StatusCode;
use risk_service::services::init_metrics;

// The recorder is process-global, so this binary holds a single test.
#[tokio::test]
async fn metrics_endpoint_exposes_prediction_counters() {
    init_metrics().expect("Failed to install metrics recorder");
    let (app, _) = TestApp::spawn_with_label(2).await;

    let response = app.post_predict(VALID_BODY).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let text = response.text().await.unwrap();
    assert!(text.contains(r#"risk_predictions_total{risk="High"} 1"#));
    assert!(text.contains("model_inference_duration_seconds"));
    assert!(text.contains("http_requests_total"));
}
