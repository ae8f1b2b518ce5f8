//! Configuration file support for promptlist.
//!
//! Loads `config.toml` from `<config_dir>/promptlist/` unless another path is
//! given on the command line.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings read from the config file
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Base path holding the `Prompt/` directory
    pub base_path: Option<PathBuf>,
    /// Print prompts to the console by default
    pub console_log: Option<bool>,
    /// Default tracing level (overridden by --log-level and RUST_LOG)
    pub log_level: Option<String>,
}

pub const CONFIG_DIR: &str = "promptlist";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

impl AppConfig {
    /// Location of the default config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from `path`.
    ///
    /// Returns:
    /// - `Ok(Some(config))` if file exists and parses successfully
    /// - `Ok(None)` if file does not exist
    /// - `Err(...)` if file exists but fails to parse (hard error)
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(Some(config))
    }

    /// Load the default config file, falling back to defaults when absent.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Ok(Self::load(&path)?.unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }

    /// Effective base path.
    /// Priority: CLI flag > config file > `<data_dir>/promptlist`
    pub fn base_path(&self, cli_base_path: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = cli_base_path.or_else(|| self.base_path.clone()) {
            return Ok(path);
        }
        let data_dir = dirs::data_dir().context("Could not determine data directory")?;
        Ok(data_dir.join(CONFIG_DIR))
    }

    /// Effective log level.
    /// Priority: CLI flag > config file > "warn"
    pub fn log_level(&self, cli_level: Option<&str>) -> String {
        cli_level
            .or(self.log_level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .to_string()
    }

    /// Console reporting is on when either the flag or the config asks for it.
    pub fn console_log(&self, cli_flag: bool) -> bool {
        cli_flag || self.console_log.unwrap_or(false)
    }
}
