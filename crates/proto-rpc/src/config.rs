// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Client configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! host = "192.168.1.50"
//! port = 5000
//! timeout_ms = 2000
//! max_frame_size = 4096
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use crate::ConfigError;
use std::path::Path;
use std::time::Duration;

/// Maximum RPC message size accepted by the device firmware.
const DEVICE_MAX_FRAME_SIZE: usize = 4096;

/// Connection settings for reaching the device.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Device hostname or IP address.
    pub host: String,
    /// TCP port of the device's RPC server.
    pub port: u16,
    /// Bound on connect and on each request/reply exchange, in milliseconds.
    pub timeout_ms: u64,
    /// Largest decoded reply accepted, in bytes.
    pub max_frame_size: usize,
}

impl ClientConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".into()));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeout_ms must be greater than zero".into()));
        }
        if self.max_frame_size == 0 {
            return Err(ConfigError::Invalid(
                "max_frame_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// `host:port` string for connecting.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            timeout_ms: 2000,
            max_frame_size: DEVICE_MAX_FRAME_SIZE,
        }
    }
}
