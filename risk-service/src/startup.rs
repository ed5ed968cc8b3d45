//! Application startup and lifecycle management.

use crate::build_router;
use crate::config::RiskConfig;
use crate::services::{ModelStore, Predictor};
use axum::Router;
use service_core::error::AppError;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: RiskConfig,
    pub predictor: Predictor,
}

impl AppState {
    pub fn new(config: RiskConfig, store: ModelStore) -> Self {
        Self {
            config,
            predictor: Predictor::new(store),
        }
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Load the model and bind the listener.
    ///
    /// Fails without binding anything if the model artifact is missing or invalid.
    pub async fn build(config: RiskConfig) -> Result<Self, AppError> {
        let store = ModelStore::load(&config.model.path).await.map_err(|e| {
            tracing::error!(
                path = %config.model.path,
                error = %e,
                "Failed to load model artifact"
            );
            AppError::InternalError(anyhow::Error::new(e).context("model artifact could not be loaded"))
        })?;

        Self::build_with_store(config, store).await
    }

    /// Bind the listener around an already-loaded model.
    pub async fn build_with_store(config: RiskConfig, store: ModelStore) -> Result<Self, AppError> {
        // Bind HTTP listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            model_type = store.model_type(),
            model_source = store.source(),
            "Risk service listening"
        );

        let router = build_router(AppState::new(config, store));

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve requests until the process is stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    /// Serve requests until `signal` resolves, then drain in-flight requests.
    pub async fn run_with_graceful_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}
