//! HTTP server assembly: router, CORS, trace layer, listener.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

use super::contact_routes::contact_routes;
use super::ApiState;

/// Build the full application router with CORS and request tracing.
pub fn build_router(config: &ServerConfig, state: Arc<ApiState>) -> Router {
    let cors = if config.cors_origins.is_empty() {
        // No origins configured: permissive, for development.
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    contact_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind the configured address and serve until ctrl-c.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server faults.
pub async fn serve(config: &ServerConfig, state: Arc<ApiState>) -> Result<()> {
    let router = build_router(config, state);
    let addr = config.socket_addr();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
