// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::errors::ProcessingError;
use crate::nlp::tokenizer;
use crate::processors::require_text;
use crate::traits::{Processor, ProcessorIntent};

pub const REVERSE_UPPERCASE: &str = "reverse_uppercase";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessResult {
    pub result: String,
    pub original_length: usize,
    pub word_count: usize,
    pub processing_type: &'static str,
}

/// Reverse Uppercase processor - reverses the input then uppercases it
pub struct ReverseUppercaseProcessor;

impl ReverseUppercaseProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReverseUppercaseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for ReverseUppercaseProcessor {
    type Output = ProcessResult;

    fn process(&self, text: &str) -> Result<ProcessResult, ProcessingError> {
        let input = require_text(text)?;

        let reversed: String = input.chars().rev().collect();

        Ok(ProcessResult {
            result: reversed.to_uppercase(),
            original_length: input.chars().count(),
            word_count: tokenizer::word_count(input),
            processing_type: REVERSE_UPPERCASE,
        })
    }

    fn name(&self) -> &'static str {
        REVERSE_UPPERCASE
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_then_uppercase() {
        let result = ReverseUppercaseProcessor::new().process("Hello world").unwrap();

        assert_eq!(result.result, "DLROW OLLEH");
        assert_eq!(result.original_length, 11);
        assert_eq!(result.word_count, 2);
        assert_eq!(result.processing_type, "reverse_uppercase");
    }

    #[test]
    fn test_lengths_are_in_characters() {
        let result = ReverseUppercaseProcessor::new().process("héllo").unwrap();

        assert_eq!(result.result, "OLLÉH");
        assert_eq!(result.original_length, 5);
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let err = ReverseUppercaseProcessor::new().process("").unwrap_err();
        assert_eq!(err, ProcessingError::no_text());
    }

    #[test]
    fn test_whitespace_only_is_accepted() {
        let result = ReverseUppercaseProcessor::new().process("  ").unwrap();
        assert_eq!(result.word_count, 0);
        assert_eq!(result.original_length, 2);
    }
}
