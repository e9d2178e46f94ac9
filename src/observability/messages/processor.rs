// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor execution events.
//!
//! This module contains message types for logging events related to:
//! * Processor execution lifecycle (start, completion, failure)
//! * Input rejected by validation

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Processor execution started.
///
/// # Log Level
/// `debug!` - Emitted once per request
///
/// # Example
/// ```
/// use wordsmith::observability::messages::processor::ProcessorExecutionStarted;
///
/// let msg = ProcessorExecutionStarted {
///     processor_id: "word_cloud_pipeline",
///     intent: "analyze",
///     input_chars: 1024,
/// };
///
/// assert!(msg.to_string().contains("word_cloud_pipeline"));
/// ```
pub struct ProcessorExecutionStarted<'a> {
    pub processor_id: &'a str,
    pub intent: &'a str,
    pub input_chars: usize,
}

impl Display for ProcessorExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' ({}) execution started: input={} chars",
            self.processor_id, self.intent, self.input_chars
        )
    }
}

impl StructuredLog for ProcessorExecutionStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_id = self.processor_id,
            intent = self.intent,
            input_chars = self.input_chars,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor_execution",
            span_name = name,
            processor_id = self.processor_id,
            intent = self.intent,
            input_chars = self.input_chars,
        )
    }
}

/// Processor execution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ProcessorExecutionCompleted<'a> {
    pub processor_id: &'a str,
    pub input_chars: usize,
    pub output_bytes: usize,
    pub duration: std::time::Duration,
}

impl Display for ProcessorExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' completed: input={} chars, output={} bytes, duration={:?}",
            self.processor_id, self.input_chars, self.output_bytes, self.duration
        )
    }
}

impl StructuredLog for ProcessorExecutionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            processor_id = self.processor_id,
            input_chars = self.input_chars,
            output_bytes = self.output_bytes,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor_completed",
            span_name = name,
            processor_id = self.processor_id,
        )
    }
}

/// Processor rejected its input.
///
/// # Log Level
/// `warn!` - Client error, nothing to fix server-side
///
/// # Example
/// ```
/// use wordsmith::observability::messages::processor::ProcessorInputRejected;
///
/// let msg = ProcessorInputRejected {
///     processor_id: "text_transformer",
///     reason: "No text provided",
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Processor 'text_transformer' rejected input: No text provided"
/// );
/// ```
pub struct ProcessorInputRejected<'a> {
    pub processor_id: &'a str,
    pub reason: &'a str,
}

impl Display for ProcessorInputRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' rejected input: {}",
            self.processor_id, self.reason
        )
    }
}

impl StructuredLog for ProcessorInputRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            processor_id = self.processor_id,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "processor_rejected",
            span_name = name,
            processor_id = self.processor_id,
        )
    }
}

/// Processor execution failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ProcessorExecutionFailed<'a> {
    pub processor_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessorExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' execution failed: {}",
            self.processor_id, self.error
        )
    }
}

impl StructuredLog for ProcessorExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            processor_id = self.processor_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "processor_failed",
            span_name = name,
            processor_id = self.processor_id,
        )
    }
}
