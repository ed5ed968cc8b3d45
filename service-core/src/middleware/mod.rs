//! HTTP middleware shared by the service router.

pub mod metrics;
pub mod security_headers;
pub mod tracing;
