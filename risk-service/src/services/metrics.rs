//! Metrics collection and Prometheus export.
//!
//! Installs the metrics exporter and provides prediction-level recorders for
//! the /metrics endpoint.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Call once at startup before any metrics
/// are recorded.
pub fn init_metrics() -> Result<(), AppError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AppError::ConfigError(anyhow::anyhow!("failed to install Prometheus recorder: {}", e)))?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| AppError::ConfigError(anyhow::anyhow!("metrics handle already initialized")))?;

    tracing::info!("Prometheus metrics initialized");
    Ok(())
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record a successful prediction.
pub fn record_prediction(risk: &'static str) {
    counter!("risk_predictions_total", "risk" => risk).increment(1);
}

/// Record a failed prediction by failure kind.
pub fn record_prediction_error(kind: &'static str) {
    counter!("risk_prediction_errors_total", "kind" => kind).increment(1);
}

/// Record time spent inside the classifier.
pub fn record_inference(model_type: &'static str, duration_secs: f64) {
    histogram!("model_inference_duration_seconds", "model_type" => model_type)
        .record(duration_secs);
}
