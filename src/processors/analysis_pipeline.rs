// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::config::consts::ANALYSIS_TOP_WORDS;
use crate::errors::ProcessingError;
use crate::nlp::{tokenizer, FrequencyTable, Sentiment, SentimentScore};
use crate::processors::require_text;
use crate::traits::{Processor, ProcessorIntent};

/// Text metrics, top words and sentiment for one input.
///
/// `most_common_words` serializes as `[["word", count], ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub word_count: usize,
    pub char_count: usize,
    pub char_count_no_spaces: usize,
    pub sentence_count: usize,
    pub most_common_words: Vec<(String, usize)>,
    pub sentiment: Sentiment,
    #[serde(rename = "positive_words_found")]
    pub positive_hits: usize,
    #[serde(rename = "negative_words_found")]
    pub negative_hits: usize,
}

/// Analysis pipeline - counts, frequency ranking and lexicon sentiment
///
/// Word counts and sentiment use the whitespace rule; the frequency ranking
/// uses word-character runs.
pub struct AnalysisPipeline {
    top_words: usize,
}

impl AnalysisPipeline {
    pub fn new() -> Self {
        Self {
            top_words: ANALYSIS_TOP_WORDS,
        }
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for AnalysisPipeline {
    type Output = AnalysisResult;

    fn process(&self, text: &str) -> Result<AnalysisResult, ProcessingError> {
        let input = require_text(text)?;

        let word_count = tokenizer::words(input).count();
        let char_count = input.chars().count();
        let char_count_no_spaces = input.chars().filter(|&c| c != ' ').count();
        let sentence_count = tokenizer::sentence_count(input);

        let frequencies = FrequencyTable::from_tokens(tokenizer::word_char_tokens(input));
        let score = SentimentScore::from_words(tokenizer::raw_words(input));

        Ok(AnalysisResult {
            word_count,
            char_count,
            char_count_no_spaces,
            sentence_count,
            most_common_words: frequencies.top(self.top_words),
            sentiment: score.label(),
            positive_hits: score.positive_hits,
            negative_hits: score.negative_hits,
        })
    }

    fn name(&self) -> &'static str {
        "analysis_pipeline"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Analyze
    }
}
