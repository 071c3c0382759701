//! Configuration loader
//!
//! Sources are merged in order, later ones winning:
//!
//! 1. `InjectyConfig::default()`
//! 2. A TOML file: the explicit path, or the first `injecty.toml` found in
//!    the working directory, `./injecty/`, the platform config dir or
//!    `~/.injecty/`
//! 3. Environment variables such as `INJECTY_DISCOVERY__UNIT_PREFIX`

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use injecty_domain::{Error, Result};
use tracing::{info, warn};

use super::InjectyConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::logging::parse_log_level;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a loader with the default search path and `INJECTY` prefix
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// The explicit configuration file path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load and validate configuration from all sources
    pub fn load(&self) -> Result<InjectyConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(InjectyConfig::default()));

        match &self.config_path {
            Some(path) if path.exists() => {
                figment = figment.merge(Toml::file(path));
                info!(path = %path.display(), "Configuration loaded");
            }
            Some(path) => {
                warn!(path = %path.display(), "Configuration file not found");
            }
            None => {
                if let Some(path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&path));
                    info!(path = %path.display(), "Configuration loaded");
                }
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: InjectyConfig = figment.extract().map_err(|e| {
            Error::configuration_with_source("Failed to extract configuration", e)
        })?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Write `config` to `path` as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &InjectyConfig, path: P) -> Result<()> {
        let rendered = toml::to_string_pretty(config).map_err(|e| {
            Error::configuration_with_source("Failed to serialize config to TOML", e)
        })?;
        std::fs::write(path.as_ref(), rendered)
            .map_err(|e| Error::configuration_with_source("Failed to write config file", e))?;
        Ok(())
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate loaded configuration values
fn validate_config(config: &InjectyConfig) -> Result<()> {
    if config.discovery.unit_prefix.trim().is_empty() {
        return Err(Error::configuration(
            "Configuration unit prefix cannot be empty",
        ));
    }
    parse_log_level(&config.logging.level)?;
    Ok(())
}
