// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for HTTP server lifecycle events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Server configuration resolved, about to bind.
///
/// # Log Level
/// `info!`
pub struct ServerStarting<'a> {
    pub address: &'a str,
    pub config_source: &'a str,
}

impl Display for ServerStarting<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting wordsmith server on {} (config: {})",
            self.address, self.config_source
        )
    }
}

impl StructuredLog for ServerStarting<'_> {
    fn log(&self) {
        tracing::info!(
            address = self.address,
            config_source = self.config_source,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("server", span_name = name, address = self.address)
    }
}

/// Listener bound and accepting connections.
///
/// # Log Level
/// `info!`
pub struct ServerListening<'a> {
    pub address: &'a str,
    pub cors_enabled: bool,
    pub max_body_bytes: usize,
}

impl Display for ServerListening<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "wordsmith listening on http://{} (cors={}, max_body_bytes={})",
            self.address, self.cors_enabled, self.max_body_bytes
        )
    }
}

impl StructuredLog for ServerListening<'_> {
    fn log(&self) {
        tracing::info!(
            address = self.address,
            cors_enabled = self.cors_enabled,
            max_body_bytes = self.max_body_bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("server", span_name = name, address = self.address)
    }
}

/// Server stopped accepting connections.
///
/// # Log Level
/// `info!`
pub struct ServerShutdown<'a> {
    pub reason: &'a str,
}

impl Display for ServerShutdown<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "wordsmith server shutting down: {}", self.reason)
    }
}

impl StructuredLog for ServerShutdown<'_> {
    fn log(&self) {
        tracing::info!(reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("server", span_name = name)
    }
}

/// A request handler panicked; the client receives a 500.
///
/// # Log Level
/// `error!` - Bug requiring attention
///
/// # Example
/// ```
/// use wordsmith::observability::messages::server::HandlerPanicked;
///
/// let msg = HandlerPanicked { message: "index out of bounds" };
/// assert_eq!(msg.to_string(), "Request handler panicked: index out of bounds");
/// ```
pub struct HandlerPanicked<'a> {
    pub message: &'a str,
}

impl Display for HandlerPanicked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Request handler panicked: {}", self.message)
    }
}

impl StructuredLog for HandlerPanicked<'_> {
    fn log(&self) {
        tracing::error!(panic_message = self.message, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("handler_panic", span_name = name)
    }
}
