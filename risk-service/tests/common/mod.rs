#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use reqwest::Response;
use risk_service::config::RiskConfig;
use risk_service::services::classifier::{Classifier, FixedClassifier};
use risk_service::services::ModelStore;
use risk_service::startup::Application;
use risk_service::{build_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Path of the artifact shipped with the crate.
pub const SAMPLE_MODEL_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/models/covid_risk_model.json");

pub const VALID_BODY: &str = r#"{"cases_per_100k": 120.5, "median_age": 42.0, "aged_65_above": 18.3}"#;

pub fn test_config() -> RiskConfig {
    let mut config = RiskConfig::default();
    config.common.port = 0; // Random port for testing
    config.model.path = SAMPLE_MODEL_PATH.to_string();
    config
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service with the shipped model artifact.
    pub async fn spawn() -> Self {
        Self::spawn_with_config(test_config()).await
    }

    pub async fn spawn_with_config(config: RiskConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    /// Spawn the service around a test double instead of a model file.
    pub async fn spawn_with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        let store = ModelStore::from_classifier(classifier, "test");
        let app = Application::build_with_store(test_config(), store)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    /// Spawn a service whose model always returns `label`, plus a handle to count calls.
    pub async fn spawn_with_label(label: i64) -> (Self, Arc<FixedClassifier>) {
        let classifier = Arc::new(FixedClassifier::new(label));
        (Self::spawn_with_classifier(classifier.clone()).await, classifier)
    }

    async fn run(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// POST a raw JSON body to /predict.
    pub async fn post_predict(&self, body: &str) -> Response {
        self.client
            .post(format!("{}/predict", self.address))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Status and JSON body of a response (Null if empty or not JSON).
pub async fn json_body(response: Response) -> (reqwest::StatusCode, Value) {
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

/// Router with a test double, for requests the TCP client cannot send cleanly.
pub fn router_with_label(label: i64) -> (Router, Arc<FixedClassifier>) {
    let classifier = Arc::new(FixedClassifier::new(label));
    let store = ModelStore::from_classifier(classifier.clone(), "test");
    (build_router(AppState::new(test_config(), store)), classifier)
}

pub fn predict_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Send a request through the router and decode the JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
