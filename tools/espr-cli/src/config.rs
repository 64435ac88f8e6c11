//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use espr_commerce::config::StorefrontConfig;
use serde::{Deserialize, Serialize};

/// Default location of the store file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = ".espr/store.json";

/// CLI configuration file.
///
/// Storefront settings (`[tracking]`, `[admin]`) sit at the top level next
/// to the CLI's own keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Store file path.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Artificial delay before an order is placed, in milliseconds.
    #[serde(default)]
    pub latency_ms: u64,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Storefront settings.
    #[serde(flatten)]
    pub storefront: StorefrontConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            latency_ms: 0,
            logging: LoggingConfig::default(),
            storefront: StorefrontConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `warn` or `espr_commerce=debug`.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log line format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}
