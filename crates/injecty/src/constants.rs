//! Engine constants
//!
//! Configuration file names, environment variable names and logging
//! defaults. Registry-level constants live in `injecty_domain::constants`.

// ============================================================================
// Configuration Files
// ============================================================================

/// Configuration file looked up when no explicit path is given
pub const DEFAULT_CONFIG_FILENAME: &str = "injecty.toml";

/// Directory name under the platform config dir
pub const DEFAULT_CONFIG_DIR: &str = "injecty";

// ============================================================================
// Environment
// ============================================================================

/// Prefix of environment variables overriding configuration (`INJECTY_...`)
pub const CONFIG_ENV_PREFIX: &str = "INJECTY";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "INJECTY_LOG";

// ============================================================================
// Logging
// ============================================================================

/// Log level used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";
