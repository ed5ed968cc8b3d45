//! service-core: Shared infrastructure for the risk prediction service.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
