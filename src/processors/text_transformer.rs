// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::config::consts::DEFAULT_TRANSFORM;
use crate::errors::ProcessingError;
use crate::processors::require_text;
use crate::traits::{Processor, ProcessorIntent};

/// The transforms `/translate` knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Rot13,
    Reverse,
    Uppercase,
    Lowercase,
}

impl TransformKind {
    /// Look up a transform by its wire name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rot13" => Some(TransformKind::Rot13),
            "reverse" => Some(TransformKind::Reverse),
            "uppercase" => Some(TransformKind::Uppercase),
            "lowercase" => Some(TransformKind::Lowercase),
            _ => None,
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            TransformKind::Rot13 => rot13(input),
            TransformKind::Reverse => input.chars().rev().collect(),
            TransformKind::Uppercase => input.to_uppercase(),
            TransformKind::Lowercase => input.to_lowercase(),
        }
    }
}

/// Shift ASCII letters by 13 places, keeping case. Everything else,
/// including non-ASCII letters, passes through.
pub fn rot13(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a') + 13) % 26 + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A') + 13) % 26 + b'A') as char,
            _ => c,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateResult {
    pub original: String,
    pub transformed: String,
    pub transformation: String,
}

/// Text Transformer processor - applies one named character transform
///
/// An unrecognised name is not an error: the text comes back unchanged and
/// the name is echoed as given.
pub struct TextTransformer {
    transformation: String,
}

impl TextTransformer {
    pub fn new(transformation: impl Into<String>) -> Self {
        Self {
            transformation: transformation.into(),
        }
    }

    pub fn transformation(&self) -> &str {
        &self.transformation
    }

    pub fn kind(&self) -> Option<TransformKind> {
        TransformKind::from_name(&self.transformation)
    }
}

impl Default for TextTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSFORM)
    }
}

impl Processor for TextTransformer {
    type Output = TranslateResult;

    fn process(&self, text: &str) -> Result<TranslateResult, ProcessingError> {
        let input = require_text(text)?;

        let transformed = match self.kind() {
            Some(kind) => kind.apply(input),
            None => {
                tracing::debug!(
                    transformation = self.transformation.as_str(),
                    "Unknown transformation, returning input unchanged"
                );
                input.to_string()
            }
        };

        Ok(TranslateResult {
            original: input.to_string(),
            transformed,
            transformation: self.transformation.clone(),
        })
    }

    fn name(&self) -> &'static str {
        "text_transformer"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(kind: &str, text: &str) -> TranslateResult {
        TextTransformer::new(kind).process(text).unwrap()
    }

    #[test]
    fn test_known_transforms() {
        let test_cases = vec![
            ("rot13", "Hello, World!", "Uryyb, Jbeyq!"),
            ("reverse", "hello", "olleh"),
            ("uppercase", "Hello", "HELLO"),
            ("lowercase", "HeLLo", "hello"),
        ];

        for (kind, input, expected) in test_cases {
            let result = translate(kind, input);
            assert_eq!(result.transformed, expected, "Failed for transform: {}", kind);
            assert_eq!(result.original, input);
            assert_eq!(result.transformation, kind);
        }
    }

    #[test]
    fn test_rot13_is_an_involution() {
        let text = "The Quick Brown Fox Jumps Over The Lazy Dog";
        assert_eq!(rot13(&rot13(text)), text);
        assert_eq!(rot13("abcxyzABCXYZ"), "nopklmNOPKLM");
    }

    #[test]
    fn test_rot13_leaves_non_ascii_alone() {
        assert_eq!(rot13("çà 123 ?"), "çà 123 ?");
    }

    #[test]
    fn test_reverse_is_an_involution() {
        let reverse = TransformKind::Reverse;
        let text = "naïve café, 42!";
        assert_eq!(reverse.apply(&reverse.apply(text)), text);
    }

    #[test]
    fn test_case_transforms_are_idempotent() {
        let text = "MiXeD case Straße";
        for kind in [TransformKind::Uppercase, TransformKind::Lowercase] {
            let once = kind.apply(text);
            assert_eq!(kind.apply(&once), once);
        }
    }

    #[test]
    fn test_unknown_transform_passes_through() {
        let result = translate("xyz", "Leave me be");
        assert_eq!(result.transformed, "Leave me be");
        assert_eq!(result.transformation, "xyz");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(TransformKind::from_name("ROT13"), None);
        assert_eq!(translate("ROT13", "abc").transformed, "abc");
    }

    #[test]
    fn test_default_is_rot13() {
        let transformer = TextTransformer::default();
        assert_eq!(transformer.transformation(), "rot13");
        assert_eq!(transformer.kind(), Some(TransformKind::Rot13));
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let result = TextTransformer::new("reverse").process("");
        assert!(result.unwrap_err().is_validation());
    }
}
