//! Configuration loaded from an optional TOML file
//!
//! ```toml
//! data_file = "tasks.jsonl"
//! log_level = "info"
//! ```
//!
//! Command-line arguments override values from the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "tasks.jsonl";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the line-delimited JSON task file
    pub data_file: PathBuf,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Read a config file; keys that are absent keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, data_file: Option<PathBuf>, verbose: bool) -> Self {
        if let Some(file) = data_file {
            self.data_file = file;
        }
        if verbose {
            self.log_level = "debug".to_string();
        }
        self
    }

    /// Parsed log level, falling back to the default on unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Warn)
    }
}
