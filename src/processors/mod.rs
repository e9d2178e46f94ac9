// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The text operations served over HTTP, one processor per endpoint.
//!
//! | Processor | Endpoint | Intent |
//! |---|---|---|
//! | `ReverseUppercaseProcessor` | `POST /process` | Transform |
//! | `AnalysisPipeline` | `POST /analyze` | Analyze |
//! | `TextTransformer` | `POST /translate` | Transform |
//! | `WordCloudPipeline` | `POST /wordcloud` | Analyze |

pub mod analysis_pipeline;
pub mod reverse_uppercase;
pub mod text_transformer;
pub mod word_cloud_pipeline;

pub use analysis_pipeline::*;
pub use reverse_uppercase::*;
pub use text_transformer::*;
pub use word_cloud_pipeline::*;

use crate::errors::ProcessingError;

/// Reject empty input before any processing happens.
///
/// Whitespace-only text is accepted; it simply yields zero counts.
pub(crate) fn require_text(text: &str) -> Result<&str, ProcessingError> {
    if text.is_empty() {
        Err(ProcessingError::no_text())
    } else {
        Ok(text)
    }
}
