// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // YAML config + constants
pub mod engine;     // processor runner
pub mod errors;     // error handling
pub mod nlp;        // tokenizer, frequency, sentiment, stopwords
pub mod observability;
pub mod processors; // one processor per endpoint
pub mod server;     // axum routes and handlers
pub mod traits;     // unified abstractions
