//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use super::output::OutputFormat;
use crate::auth::HomeDir;

/// Location of the config file, relative to the home directory.
pub const CONFIG_PATH: &str = ".config/sbc/config.toml";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log filter directive, e.g. `sbc=debug`
    pub log: Option<String>,

    /// Default output format for reporting commands
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration from the config file under `home`.
    ///
    /// Returns default config if the file doesn't exist or no home directory
    /// is known.
    pub fn load(home: &impl HomeDir) -> Result<Self> {
        let Some(config_path) = Self::config_path(home) else {
            return Ok(Self::default());
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/sbc/config.toml`
    pub fn config_path(home: &impl HomeDir) -> Option<PathBuf> {
        home.home_dir().map(|h| h.join(CONFIG_PATH))
    }

    /// Resolve the output format, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--format` argument
    /// 2. Config file `format` setting
    /// 3. Human
    pub fn format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format.or(self.format).unwrap_or_default()
    }
}
