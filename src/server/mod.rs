//! HTTP boundary: routes, handlers and error mapping.

mod error;
mod handlers;
mod pages;

pub use error::ApiError;

use crate::config::Config;
use crate::translation::TranslationService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub service: Arc<TranslationService>,
}

impl AppState {
    pub fn new(config: Config, service: TranslationService) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_page))

        // Health probe
        .route("/health/api", get(handlers::health_check))

        // API
        .route("/api/v1/translate", post(handlers::translate))
        .route("/api/v1/languages", get(handlers::languages))
        .route("/api/v1/metrics", get(handlers::metrics))

        // Static assets
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
