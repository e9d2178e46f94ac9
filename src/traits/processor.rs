// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::errors::ProcessingError;

/// What a processor does with its input.
///
/// `Transform` processors produce a rewritten text; `Analyze` processors
/// leave the text alone and report measurements about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorIntent {
    Transform,
    Analyze,
}

impl ProcessorIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorIntent::Transform => "transform",
            ProcessorIntent::Analyze => "analyze",
        }
    }
}

/// A single-pass text operation behind one endpoint.
///
/// Implementations are stateless between calls and must reject empty input
/// with `ProcessingError::Validation` before doing any work.
pub trait Processor: Send + Sync {
    type Output: Serialize;

    fn process(&self, text: &str) -> Result<Self::Output, ProcessingError>;

    fn name(&self) -> &'static str;

    fn declared_intent(&self) -> ProcessorIntent;
}
