//! HTTP handlers for the risk service.

pub mod health;
pub mod home;
pub mod metrics;
pub mod predict;

pub use health::{health_check, readiness_check};
pub use home::home;
pub use metrics::metrics_endpoint;
pub use predict::predict;
