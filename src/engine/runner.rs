// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Runs one processor against one input and wraps it in logging.

use serde_json::Value;
use std::time::Instant;

use crate::errors::ProcessingError;
use crate::observability::messages::{processor::*, StructuredLog};
use crate::traits::Processor;

/// Run `processor` over `text` and serialize its output.
///
/// The whole call happens inside a `processor_execution` span. Success,
/// validation rejections and internal failures are each logged at their
/// own level. A result that cannot be serialized is an internal error.
pub fn execute<P: Processor + ?Sized>(processor: &P, text: &str) -> Result<Value, ProcessingError> {
    let start_msg = ProcessorExecutionStarted {
        processor_id: processor.name(),
        intent: processor.declared_intent().as_str(),
        input_chars: text.chars().count(),
    };

    let span = start_msg.span("processor_execution");
    let _guard = span.enter();
    start_msg.log();

    let start_time = Instant::now();

    let outcome = processor
        .process(text)
        .and_then(|output| serde_json::to_value(output).map_err(ProcessingError::from));

    match outcome {
        Ok(value) => {
            ProcessorExecutionCompleted {
                processor_id: processor.name(),
                input_chars: start_msg.input_chars,
                output_bytes: value.to_string().len(),
                duration: start_time.elapsed(),
            }
            .log();
            Ok(value)
        }
        Err(ProcessingError::Validation(reason)) => {
            ProcessorInputRejected {
                processor_id: processor.name(),
                reason: &reason,
            }
            .log();
            Err(ProcessingError::Validation(reason))
        }
        Err(error) => {
            ProcessorExecutionFailed {
                processor_id: processor.name(),
                error: &error,
            }
            .log();
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::{AnalysisPipeline, TextTransformer};
    use crate::traits::ProcessorIntent;
    use serde::{Serialize, Serializer};

    /// Output whose serialization always fails
    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode"))
        }
    }

    struct BrokenProcessor;

    impl Processor for BrokenProcessor {
        type Output = Unserializable;

        fn process(&self, _text: &str) -> Result<Unserializable, ProcessingError> {
            Ok(Unserializable)
        }

        fn name(&self) -> &'static str {
            "broken"
        }

        fn declared_intent(&self) -> ProcessorIntent {
            ProcessorIntent::Analyze
        }
    }

    struct FailingProcessor;

    impl Processor for FailingProcessor {
        type Output = String;

        fn process(&self, _text: &str) -> Result<String, ProcessingError> {
            Err(ProcessingError::Internal("lexicon unavailable".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }

        fn declared_intent(&self) -> ProcessorIntent {
            ProcessorIntent::Transform
        }
    }

    #[test]
    fn test_execute_serializes_output() {
        let value = execute(&TextTransformer::new("uppercase"), "abc").unwrap();

        assert_eq!(value["original"], "abc");
        assert_eq!(value["transformed"], "ABC");
        assert_eq!(value["transformation"], "uppercase");
    }

    #[test]
    fn test_execute_passes_validation_errors_through() {
        let err = execute(&AnalysisPipeline::new(), "").unwrap_err();
        assert_eq!(err, ProcessingError::no_text());
    }

    #[test]
    fn test_execute_passes_internal_errors_through() {
        let err = execute(&FailingProcessor, "text").unwrap_err();
        assert_eq!(err, ProcessingError::Internal("lexicon unavailable".to_string()));
    }

    #[test]
    fn test_serialization_failure_is_internal() {
        let err = execute(&BrokenProcessor, "text").unwrap_err();

        assert!(!err.is_validation());
        assert!(err.to_string().contains("cannot encode"));
    }
}
