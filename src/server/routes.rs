// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::server::error::handle_panic;
use crate::server::handlers;

/// Build the application router for `config`.
///
/// Layers, innermost first: body limit, panic catcher, request tracing,
/// then CORS when enabled.
pub fn build_router(config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health))
        .route("/process", post(handlers::process))
        .route("/analyze", post(handlers::analyze))
        .route("/translate", post(handlers::translate))
        .route("/wordcloud", post(handlers::wordcloud))
        .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http());

    if config.cors.enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
