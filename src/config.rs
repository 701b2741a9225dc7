//! Configuration loading and management.
//!
//! Loads engine configuration from `./augur.toml` (or
//! `$AUGUR_CONFIG_PATH`). Environment variables override file values;
//! file values override defaults.
//!
//! Precedence: env vars > config file > defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Engine configuration loaded from TOML.
///
/// Path: `./augur.toml` or `$AUGUR_CONFIG_PATH`.
/// Env vars override file values; file values override defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lowercase ISO 3166-1 country code used for news when no
    /// location is spoken. Overridable via `AUGUR_DEFAULT_COUNTRY`.
    pub default_country: String,
    /// Tracing log level filter. Overridable via `AUGUR_LOG_LEVEL`.
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_country: "us".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl EngineConfig {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// Config file path: `$AUGUR_CONFIG_PATH` or `./augur.toml`.
    /// If the file does not exist, returns defaults.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from TOML file only, no env overrides.
    fn load_from_file() -> Result<Self> {
        let path = Self::config_path_with(|key| std::env::var(key).ok());
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loading config from file");
                Self::from_toml(&contents)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file found, using defaults");
                Ok(EngineConfig::default())
            }
            Err(e) => Err(anyhow::anyhow!("failed to read config file: {e}")),
        }
    }

    /// Resolve config path using a custom env resolver (for testing).
    fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
        match env("AUGUR_CONFIG_PATH") {
            Some(p) => PathBuf::from(p),
            None => PathBuf::from("augur.toml"),
        }
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Takes a resolver function for testability (avoids unsafe
    /// `set_var` in tests).
    fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("AUGUR_DEFAULT_COUNTRY") {
            self.default_country = v.to_lowercase();
        }
        if let Some(v) = env("AUGUR_LOG_LEVEL") {
            self.log_level = v;
        }
    }

    /// Parse a TOML string into config (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(toml_str).context("failed to parse config TOML")?;
        Ok(config)
    }
}
