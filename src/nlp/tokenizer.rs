// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence break pattern is valid"));

static WORD_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("word character pattern is valid"));

/// Lowercased whitespace-separated words, punctuation kept.
///
/// `"Good!"` stays `"good!"`, which is what the sentiment lexicon sees.
pub fn raw_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

/// Lowercased whitespace-separated words with surrounding ASCII punctuation
/// stripped.
///
/// Yields exactly one item per whitespace token; a token made only of
/// punctuation becomes an empty string.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| c.is_ascii_punctuation()).to_lowercase())
}

/// Number of whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of sentences, where sentences are separated by runs of `.`, `!`
/// or `?` and only pieces with non-whitespace content count.
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_BREAK_RE
        .split(text)
        .filter(|piece| !piece.trim().is_empty())
        .count()
}

/// Maximal runs of word characters (letters, digits, underscore) in the
/// lowercased text.
pub fn word_char_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_CHARS_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
