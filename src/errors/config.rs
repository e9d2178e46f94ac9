// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating the server configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the expected schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A field parsed correctly but holds an unusable value
    #[error("Invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
