// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default bind address; the browser extension talks to localhost only
pub const DEFAULT_BIND_ADDRESS: &str = "localhost";
/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;
/// Default request body cap (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Number of entries reported in `most_common_words` by `/analyze`
pub const ANALYSIS_TOP_WORDS: usize = 5;
/// Number of entries reported in `word_data` by `/wordcloud`
pub const WORD_CLOUD_TOP_WORDS: usize = 50;
/// Word-cloud tokens must be strictly longer than this many characters
pub const WORD_CLOUD_MIN_TOKEN_CHARS: usize = 2;
/// Transform applied by `/translate` when the request omits `type`
pub const DEFAULT_TRANSFORM: &str = "rot13";
