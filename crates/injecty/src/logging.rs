//! Structured logging with tracing
//!
//! The engine only emits `tracing` events; hosts that want output call
//! [`init_logging`] once at startup. `INJECTY_LOG` takes an `EnvFilter`
//! directive and overrides the configured level. Events go to stderr so
//! they never mix with a binary's own output.

use injecty_domain::{Error, Result};
use tracing::{Level, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;

/// Install the global subscriber described by `config`
///
/// Fails with a configuration error if the level is invalid or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = level_filter(level);

    let registry = Registry::default().with(filter);
    let installed = if config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_names(true),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init()
    };
    installed.map_err(|e| Error::configuration_with_source("Failed to initialize logging", e))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// `INJECTY_LOG` directives on top of `level` as the default directive
fn level_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}
