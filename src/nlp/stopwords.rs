// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Stopword filtering for word-cloud data.

use crate::config::consts::WORD_CLOUD_MIN_TOKEN_CHARS;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
        "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
        "these", "those",
    ]
    .into_iter()
    .collect()
});

/// Drops stopwords and short tokens from a lowercased token stream.
#[derive(Debug, Clone, Copy)]
pub struct StopwordFilter {
    min_chars: usize,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self {
            min_chars: WORD_CLOUD_MIN_TOKEN_CHARS,
        }
    }
}

impl StopwordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_stopword(word: &str) -> bool {
        STOPWORDS.contains(word)
    }

    /// A token survives when it is not a stopword and has more than
    /// `min_chars` characters.
    pub fn keeps(&self, token: &str) -> bool {
        !Self::is_stopword(token) && token.chars().count() > self.min_chars
    }

    /// Filter `tokens`, preserving order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| self.keeps(t)).collect()
    }
}
