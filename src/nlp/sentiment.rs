// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Lexicon-based polarity. Exact string matches only; no stemming, no
//! weighting, no negation handling.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome", "happy",
        "love", "best",
    ]
    .into_iter()
    .collect()
});

static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bad", "terrible", "awful", "horrible", "hate", "worst", "sad", "angry", "disappointed",
    ]
    .into_iter()
    .collect()
});

/// Overall polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// Lexicon hit counts and the label derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentScore {
    pub positive_hits: usize,
    pub negative_hits: usize,
}

impl SentimentScore {
    /// Score already-lowercased words. Each word must equal a lexicon entry
    /// exactly to count, so `"good!"` is not a hit.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut score = SentimentScore {
            positive_hits: 0,
            negative_hits: 0,
        };
        for word in words {
            let word = word.as_ref();
            if POSITIVE_WORDS.contains(word) {
                score.positive_hits += 1;
            } else if NEGATIVE_WORDS.contains(word) {
                score.negative_hits += 1;
            }
        }
        score
    }

    pub fn label(&self) -> Sentiment {
        if self.positive_hits > self.negative_hits {
            Sentiment::Positive
        } else if self.negative_hits > self.positive_hits {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::raw_words;

    fn score(text: &str) -> SentimentScore {
        SentimentScore::from_words(raw_words(text))
    }

    #[test]
    fn test_positive_text() {
        let s = score("This is good and great");
        assert_eq!(s.positive_hits, 2);
        assert_eq!(s.negative_hits, 0);
        assert_eq!(s.label(), Sentiment::Positive);
    }

    #[test]
    fn test_negative_text() {
        let s = score("bad and terrible");
        assert_eq!(s.negative_hits, 2);
        assert_eq!(s.label(), Sentiment::Negative);
    }

    #[test]
    fn test_tie_is_neutral() {
        assert_eq!(score("good and bad").label(), Sentiment::Neutral);
        assert_eq!(score("nothing to see here").label(), Sentiment::Neutral);
    }

    #[test]
    fn test_matching_is_exact_after_lowercasing() {
        let s = score("GOOD Love good! loved badly");
        assert_eq!(s.positive_hits, 2);
        assert_eq!(s.negative_hits, 0);
    }

    #[test]
    fn test_label_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Sentiment::Negative).unwrap(), "\"Negative\"");
        assert_eq!(Sentiment::Neutral.to_string(), "Neutral");
    }
}
