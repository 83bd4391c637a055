//! # Receipt Rewards API
//!
//! HTTP front end for receipt submission and point lookup.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Rewards API Routes                              │
//! │                                                                         │
//! │  ┌────────────────────────────┐  ┌────────────────────────────────────┐│
//! │  │  POST /receipts/process    │  │  GET /receipts/{id}/points         ││
//! │  │                            │  │                                    ││
//! │  │ • decode ReceiptPayload    │  │ • lookup receipt                   ││
//! │  │ • validate → Receipt       │  │ • score (outside the lock)         ││
//! │  │ • register → {"id": ..}    │  │ • {"points": N} or 404             ││
//! │  └────────────────────────────┘  └────────────────────────────────────┘│
//! │                                                                         │
//! │  ┌────────────────────────────┐                                        │
//! │  │  GET /health               │   TraceLayer logs every request        │
//! │  └────────────────────────────┘                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config`] for the environment variables.

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod service;
pub mod telemetry;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use rewards_store::ReceiptRegistry;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::RewardsConfig;
pub use error::{ApiError, ApiResult};
pub use service::ReceiptService;

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    pub service: ReceiptService,
    pub config: RewardsConfig,
}

impl AppState {
    /// State backed by a fresh, empty registry.
    pub fn new(config: RewardsConfig) -> Self {
        AppState {
            service: ReceiptService::new(Arc::new(ReceiptRegistry::new())),
            config,
        }
    }
}

/// Builds the full router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/receipts/process", post(routes::process_receipt))
        .route("/receipts/{id}/points", get(routes::get_points))
        .route("/health", get(routes::health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
