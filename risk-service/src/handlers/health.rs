use crate::dtos::HealthResponse;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// Health check endpoint for Docker/K8s liveness probes.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Service"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.predictor.store();
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "risk-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_type: store.model_type().to_string(),
        model_source: store.source().to_string(),
        model_loaded_at: store.loaded_at().to_rfc3339(),
    })
}

/// Readiness check endpoint for K8s readiness probes.
///
/// The model is loaded before the listener is bound, so a running process is
/// always ready.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
