// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while turning an input text into a processor result.

use thiserror::Error;

/// Message returned when a request carries no usable text.
pub const NO_TEXT_PROVIDED: &str = "No text provided";

/// Failure of a single processor invocation.
///
/// There are exactly two kinds. A `Validation` error is the caller's fault
/// (missing or empty text, undecodable body) and maps to HTTP 400. An
/// `Internal` error is anything unexpected during processing and maps to
/// HTTP 500. The mapping itself lives in the server module; nothing below
/// the HTTP boundary knows about status codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

impl ProcessingError {
    /// The standard "missing or empty text" rejection.
    pub fn no_text() -> Self {
        ProcessingError::Validation(NO_TEXT_PROVIDED.to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ProcessingError::Validation(_))
    }
}

impl From<serde_json::Error> for ProcessingError {
    fn from(err: serde_json::Error) -> Self {
        ProcessingError::Internal(format!("Failed to serialize result: {}", err))
    }
}
