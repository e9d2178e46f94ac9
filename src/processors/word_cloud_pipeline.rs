// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::config::consts::WORD_CLOUD_TOP_WORDS;
use crate::errors::ProcessingError;
use crate::nlp::{tokenizer, FrequencyTable, StopwordFilter};
use crate::processors::require_text;
use crate::traits::{Processor, ProcessorIntent};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCloudResult {
    pub word_data: Vec<WordCount>,
    /// Every word-character token, before filtering
    pub total_words: usize,
    /// Distinct tokens left after filtering
    pub unique_words: usize,
    /// Tokens left after filtering, duplicates included
    pub filtered_words: usize,
}

/// Word cloud pipeline - creates a ranked histogram of meaningful words
pub struct WordCloudPipeline {
    filter: StopwordFilter,
    top_words: usize,
}

impl WordCloudPipeline {
    pub fn new() -> Self {
        Self {
            filter: StopwordFilter::new(),
            top_words: WORD_CLOUD_TOP_WORDS,
        }
    }
}

impl Default for WordCloudPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for WordCloudPipeline {
    type Output = WordCloudResult;

    fn process(&self, text: &str) -> Result<WordCloudResult, ProcessingError> {
        let input = require_text(text)?;

        let tokens = tokenizer::word_char_tokens(input);
        let total_words = tokens.len();

        let kept = self.filter.filter(tokens);
        let filtered_words = kept.len();

        let frequencies = FrequencyTable::from_tokens(kept);

        let word_data = frequencies
            .top(self.top_words)
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect();

        Ok(WordCloudResult {
            word_data,
            total_words,
            unique_words: frequencies.len(),
            filtered_words,
        })
    }

    fn name(&self) -> &'static str {
        "word_cloud_pipeline"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Analyze
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud(text: &str) -> WordCloudResult {
        WordCloudPipeline::new().process(text).unwrap()
    }

    #[test]
    fn test_counts_for_repeated_word() {
        let result = cloud("Hello, hello world!");

        assert_eq!(result.total_words, 3);
        assert_eq!(result.unique_words, 2);
        assert_eq!(result.filtered_words, 3);
        assert_eq!(
            result.word_data,
            vec![
                WordCount { word: "hello".to_string(), count: 2 },
                WordCount { word: "world".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_stopwords_and_short_tokens_are_filtered() {
        let result = cloud("The cat and the dog sat on a mat. The cat ran!");

        assert_eq!(result.total_words, 12);
        // cat dog sat mat cat ran
        assert_eq!(result.filtered_words, 6);
        assert_eq!(result.unique_words, 5);
        assert_eq!(result.word_data[0], WordCount { word: "cat".to_string(), count: 2 });
        assert_eq!(result.word_data[1].word, "dog");
    }

    #[test]
    fn test_word_data_is_capped_at_fifty() {
        let text: String = (0..60).map(|i| format!("word{} ", i)).collect();
        let result = cloud(&text);

        assert_eq!(result.unique_words, 60);
        assert_eq!(result.word_data.len(), 50);
        assert_eq!(result.word_data[0].word, "word0");
        assert_eq!(result.word_data[49].word, "word49");
    }

    #[test]
    fn test_only_stopwords_yields_empty_cloud() {
        let result = cloud("the and of it is");

        assert_eq!(result.total_words, 5);
        assert_eq!(result.filtered_words, 0);
        assert_eq!(result.unique_words, 0);
        assert!(result.word_data.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(cloud("rust rust crab")).unwrap();

        assert_eq!(value["word_data"][0]["word"], "rust");
        assert_eq!(value["word_data"][0]["count"], 2);
        assert_eq!(value["total_words"], 3);
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(WordCloudPipeline::new().process("").unwrap_err().is_validation());
    }
}
