//! HTTP server lifecycle.

use std::time::Duration;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::http::{
    middleware::{create_middleware_stack, request_logger},
    routes::create_router,
    AppState,
};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            request_timeout: Duration::from_secs(60),
        }
    }
}

pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    create_router(state)
        .layer(middleware::from_fn(request_logger))
        .layer(create_middleware_stack(request_timeout))
}

pub async fn start_server(
    config: ServerConfig,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("HTTP server listening on http://{}", listener.local_addr()?);

    serve(listener, config.request_timeout, state).await
}

/// Serves until Ctrl+C, SIGTERM, or a message on `state.shutdown_tx`.
pub async fn serve(
    listener: TcpListener,
    request_timeout: Duration,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut shutdown_rx = state.shutdown_tx.subscribe();
    let app = build_app(state, request_timeout);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C signal");
                }
                _ = shutdown_rx.recv() => {
                    info!("Received shutdown signal");
                }
                _ = wait_for_sigterm() => {
                    info!("Received SIGTERM signal");
                }
            }

            info!("Starting graceful shutdown...");
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!("Failed to install SIGTERM handler: {}", e);
            std::future::pending::<()>().await
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await
}
