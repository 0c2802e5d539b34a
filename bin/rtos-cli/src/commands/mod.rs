// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommands and the setup they share.

pub mod config;
pub mod tasks;

use anyhow::Context;
use proto_rpc::ClientConfig;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes tracing on stderr so stdout carries only the report.
///
/// - 0: warn (default)
/// - 1: info (-v)
/// - 2: debug (-vv)
/// - 3+: trace (-vvv)
///
/// `RUST_LOG` overrides the level; `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Connection settings given on the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub timeout_ms: Option<u64>,
}

/// Loads the config file (or defaults) and applies command-line overrides.
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> anyhow::Result<ClientConfig> {
    let mut config = match path {
        Some(p) => ClientConfig::from_file(p)
            .with_context(|| format!("failed to load config '{}'", p.display()))?,
        None => ClientConfig::default(),
    };

    if let Some(host) = overrides.host {
        config.host = host;
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(timeout_ms) = overrides.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    config.validate().context("invalid connection settings")?;

    tracing::debug!(addr = %config.addr(), timeout_ms = config.timeout_ms, "effective config");
    Ok(config)
}

/// Parses a positive number of seconds, e.g. `"2"` or `"0.5"`.
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("expected a number of seconds, got '{s}'"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("interval must be a positive number of seconds, got '{s}'"));
    }
    Ok(Duration::from_secs_f64(secs))
}
