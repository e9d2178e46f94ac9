// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_BIND_ADDRESS, DEFAULT_LOG_FILTER, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Main configuration structure for the wordsmith server.
///
/// Every section is optional; an empty file (or no file at all) yields a
/// server on `localhost:8000` with CORS open to any origin.
///
/// # Fields
/// * `server` - Where to listen
/// * `cors` - Cross-origin policy for browser clients
/// * `limits` - Request size limits
/// * `logging` - Default tracing filter
///
/// # Example
/// ```yaml
/// server:
///   bind_address: 127.0.0.1
///   port: 8080
/// cors:
///   enabled: false
/// limits:
///   max_body_bytes: 65536
/// logging:
///   filter: "wordsmith=debug,tower_http=info"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerOptions,
    #[serde(default)]
    pub cors: CorsOptions,
    #[serde(default)]
    pub limits: LimitOptions,
    #[serde(default)]
    pub logging: LoggingOptions,
}

/// Listening socket options.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ServerOptions {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

/// Cross-origin resource sharing.
///
/// When enabled, any origin may call the API. The only client is a browser
/// extension whose origin is not known ahead of time.
#[derive(Debug, Deserialize, PartialEq)]
pub struct CorsOptions {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LimitOptions {
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for LimitOptions {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Logging options. `RUST_LOG` takes precedence over `filter` at startup.
#[derive(Debug, Deserialize, PartialEq)]
pub struct LoggingOptions {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_true() -> bool {
    true
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Config {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.bind_address",
                reason: "must not be empty".to_string(),
            });
        }
        if self.limits.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "limits.max_body_bytes",
                reason: "must be greater than zero".to_string(),
            });
        }
        EnvFilter::try_new(&self.logging.filter).map_err(|e| ConfigError::InvalidValue {
            field: "logging.filter",
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

/// Parse a config from YAML text. An empty or comment-only document yields
/// the defaults.
pub fn parse_config(yaml: &str) -> Result<Config, ConfigError> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    let cfg: Option<Config> = serde_yaml::from_str(yaml)?;
    Ok(cfg.unwrap_or_default())
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Load and validate a config from a YAML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.listen_address(), "localhost:8000");
        assert!(cfg.cors.enabled);
        assert_eq!(cfg.limits.max_body_bytes, 1024 * 1024);
        assert_eq!(cfg.logging.filter, "info");
    }

    #[test]
    fn parse_comment_only_config_uses_defaults() {
        let cfg = parse_config("# nothing configured yet\n").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn parse_partial_config() {
        let yaml = r#"
server:
  port: 9090
cors:
  enabled: false
"#;

        let cfg = parse_config(yaml).unwrap();
        assert_eq!(cfg.server.bind_address, "localhost");
        assert_eq!(cfg.server.port, 9090);
        assert!(!cfg.cors.enabled);
        assert_eq!(cfg.limits.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn parse_rejects_wrong_types() {
        let yaml = r#"
server:
  port: "not a number"
"#;

        let result = parse_config(yaml);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_zero_body_limit() {
        let mut cfg = Config::default();
        cfg.limits.max_body_bytes = 0;

        let error_msg = cfg.validate().unwrap_err().to_string();
        assert!(error_msg.contains("limits.max_body_bytes"));
    }

    #[test]
    fn test_validate_rejects_blank_bind_address() {
        let mut cfg = Config::default();
        cfg.server.bind_address = "   ".to_string();

        let error_msg = cfg.validate().unwrap_err().to_string();
        assert!(error_msg.contains("server.bind_address"));
    }

    #[test]
    fn test_validate_rejects_bad_log_filter() {
        let mut cfg = Config::default();
        cfg.logging.filter = "wordsmith=notalevel".to_string();

        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let yaml = r#"
server:
  bind_address: 127.0.0.1
  port: 8123
limits:
  max_body_bytes: 4096
logging:
  filter: debug
"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.listen_address(), "127.0.0.1:8123");
        assert_eq!(cfg.limits.max_body_bytes, 4096);
        assert_eq!(cfg.logging.filter, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");

        let result = load_and_validate_config(&missing);
        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("Failed to read config file"));
        assert!(error_msg.contains("nope.yaml"));
    }
}
