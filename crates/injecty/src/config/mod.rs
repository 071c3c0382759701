//! Configuration
//!
//! Settings are plain serde types with defaults; [`ConfigLoader`] layers a
//! TOML file and `INJECTY_` environment variables on top of them.
//!
//! ```toml
//! [discovery]
//! unit_prefix = "injecty_config"
//!
//! [logging]
//! level = "debug"
//! json_format = false
//! ```

mod loader;

use injecty_domain::constants::DEFAULT_UNIT_PREFIX;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

pub use loader::ConfigLoader;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectyConfig {
    /// Configuration unit discovery
    pub discovery: DiscoveryConfig,
    /// Logging output
    pub logging: LoggingConfig,
}

/// Configuration unit discovery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Name prefix selecting the units applied by `create_injecty_context`
    pub unit_prefix: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            unit_prefix: DEFAULT_UNIT_PREFIX.to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}
