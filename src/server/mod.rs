pub mod handlers;

use crate::errors::{MarketHubError, Result};
use crate::providers::base::{FxProvider, NewsProvider, QuoteProvider, SupplyProvider};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use serde_json::json;
use std::sync::Arc;

/// Shared handler state: one adapter per upstream capability. Everything
/// is read-only, requests share nothing else.
pub struct AppState {
    pub quotes: Arc<dyn QuoteProvider + Send + Sync>,
    pub supply: Arc<dyn SupplyProvider + Send + Sync>,
    pub fx: Arc<dyn FxProvider + Send + Sync>,
    pub news: Arc<dyn NewsProvider + Send + Sync>,
}

/// Error response carrying the status and the `{"error": ...}` body.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Map a domain error to the route's HTTP shape: not-found becomes a
    /// 404 with a fixed per-entity message, anything else a 500 with the
    /// upstream message (or the route's fallback when there is none).
    pub fn wrap(err: MarketHubError, not_found_msg: &str, fallback_msg: &str) -> Self {
        if err.is_not_found() {
            return Self {
                status: StatusCode::NOT_FOUND,
                message: not_found_msg.to_string(),
            };
        }

        let message = err.to_string();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: if message.is_empty() {
                fallback_msg.to_string()
            } else {
                message
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/stock/:symbol", get(handlers::get_stock))
        .route("/api/index/:symbol", get(handlers::get_index))
        .route("/api/crypto/:symbol", get(handlers::get_crypto))
        .route("/api/currency", get(handlers::get_currency))
        .route("/api/news", get(handlers::get_news))
        .with_state(state)
}

/// Bind and serve until ctrl-c.
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
