// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout wordsmith. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep field names consistent between the human-readable message and the
//!   structured fields attached to each event
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::processor` - Processor execution events
//! * `messages::server` - HTTP server lifecycle and request failures
//!
//! # Usage
//!
//! ```rust
//! use wordsmith::observability::messages::processor::ProcessorExecutionFailed;
//! use wordsmith::observability::messages::StructuredLog;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = ProcessorExecutionFailed {
//!     processor_id: "analysis_pipeline",
//!     error: &error,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
