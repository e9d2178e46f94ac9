// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use tracing_subscriber::EnvFilter;
use wordsmith::config::{load_and_validate_config, Config};
use wordsmith::observability::messages::{server::ServerStarting, StructuredLog};

const DEFAULT_CONFIG_SOURCE: &str = "built-in defaults";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured filter applies.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 || args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [config.yaml]", args[0]);
        eprintln!("Example: {} configs/wordsmith.yaml", args[0]);
        std::process::exit(if args.len() > 2 { 1 } else { 0 });
    }

    let (config, config_source) = match args.get(1) {
        Some(path) => (load_and_validate_config(path)?, path.as_str()),
        None => {
            let config = Config::default();
            config.validate()?;
            (config, DEFAULT_CONFIG_SOURCE)
        }
    };

    init_tracing(&config);

    ServerStarting {
        address: &config.listen_address(),
        config_source,
    }
    .log();

    wordsmith::server::run(&config).await
}
