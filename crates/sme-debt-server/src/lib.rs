//! HTTP layer for the SME debt calculators.
//!
//! This crate provides:
//! - REST API routes, one module per calculator
//! - Locale-keyed message catalog for the bilingual UI
//! - Error mapping from calculator errors to JSON responses

pub mod config;
pub mod error;
pub mod i18n;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::i18n::Catalog;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Message catalog, built once at startup.
    pub messages: Arc<Catalog>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Catalog::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
