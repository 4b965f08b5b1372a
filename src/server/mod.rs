//! HTTP surface of the paste server

pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

pub use models::{ErrorResponse, HealthResponse, PasteRequest, PasteResponse, DEFAULT_DELAY};

use crate::backend::PasteHandle;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// State shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub paster: PasteHandle,
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(paster: PasteHandle, service_name: &str) -> Self {
        Self {
            paster,
            service_name: Arc::from(service_name),
        }
    }
}

/// Routes, with a 404 for every other path and method
///
/// Paste bodies are not size-capped, so any text reaches validation and gets
/// a JSON answer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health).fallback(routes::not_found))
        .route("/paste", post(routes::paste).fallback(routes::not_found))
        .fallback(routes::not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(axum::middleware::from_fn(middleware::cors))
        .layer(axum::middleware::from_fn(middleware::log_request))
        .with_state(state)
}

/// Binds the listener, failing with the address in the message
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))
}

/// Serves until `shutdown` resolves, then drains in-flight requests
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    Ok(())
}
