// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTTP surface: routing, request decoding and error mapping.
//!
//! # Endpoints
//!
//! - `GET /health`
//! - `POST /process` - `{text}`
//! - `POST /analyze` - `{text}`
//! - `POST /translate` - `{text, type}`
//! - `POST /wordcloud` - `{text}`
//!
//! Every failure is answered with `{"error": "..."}`: 400 for bad input,
//! 500 for anything else, including handler panics.

mod error;
pub mod handlers;
mod routes;


pub use error::{handle_panic, ErrorBody};
pub use handlers::{HealthStatus, TextRequest};
pub use routes::build_router;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::observability::messages::{server::*, StructuredLog};

/// Bind the configured address and serve until Ctrl-C.
///
/// # Errors
///
/// Returns error if:
/// - the listener fails to bind (address in use, unresolvable host)
/// - the server hits a fatal I/O error while running
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let address = config.listen_address();

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind listener to {}", address))?;

    let bound = listener
        .local_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| address.clone());

    ServerListening {
        address: &bound,
        cors_enabled: config.cors.enabled,
        max_body_bytes: config.limits.max_body_bytes,
    }
    .log();

    axum::serve(listener, build_router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    ServerShutdown {
        reason: "Ctrl-C received",
    }
    .log();
}
