// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text segmentation and lexicon lookups shared by the processors.
//!
//! Two word rules coexist and are never unified:
//! * whitespace split (`tokenizer::raw_words`, `tokenizer::words`), which
//!   drives word counts and sentiment
//! * word-character runs (`tokenizer::word_char_tokens`), which drive
//!   frequency tables and the word cloud
//!
//! `"don't"` is one token under the first rule and two under the second.

pub mod frequency;
pub mod sentiment;
pub mod stopwords;
pub mod tokenizer;

pub use frequency::FrequencyTable;
pub use sentiment::{Sentiment, SentimentScore};
pub use stopwords::StopwordFilter;
