//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by implementation constructors and configure procedures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the Injecty registry
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration unit declares no `priority` attribute
    #[error("Configuration unit {unit} missing required 'priority' attribute")]
    MissingPriority {
        /// Name of the offending unit
        unit: String,
    },

    /// Configuration unit declares a `priority` attribute that is not an integer
    #[error("Configuration unit {unit} has invalid 'priority' attribute: expected int, got {found}")]
    InvalidPriorityType {
        /// Name of the offending unit
        unit: String,
        /// Kind of the value that was found instead
        found: &'static str,
    },

    /// Configuration unit declares no `configure` procedure
    #[error("Configuration unit {unit} missing required 'configure' method")]
    MissingConfigure {
        /// Name of the offending unit
        unit: String,
    },

    /// Configuration unit's `configure` procedure does not accept the context
    #[error(
        "Configuration unit {unit} has invalid 'configure' method: expected at least 1 parameter, got {arity}"
    )]
    InvalidConfigureSignature {
        /// Name of the offending unit
        unit: String,
        /// Number of parameters the procedure accepts
        arity: usize,
    },

    /// Query against a base type that has never been registered
    #[error("No registry entry for base type {base}")]
    UnknownBaseType {
        /// Display name of the base type
        base: &'static str,
    },

    /// Default selection found no candidate after filtering
    #[error("No implementations found for base type {base}")]
    NoImplementationsFound {
        /// Display name of the base type
        base: &'static str,
    },

    /// Failure raised by an implementation's own constructor
    #[error(transparent)]
    Construction(BoxError),

    /// A configuration unit's procedure failed during a configuration pass
    #[error("Error configuring context with unit '{unit}': {source}")]
    Configure {
        /// Name of the failing unit
        unit: String,
        /// Error returned by the procedure
        #[source]
        source: BoxError,
    },

    /// Settings could not be loaded or are invalid
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Validation error creation methods
impl Error {
    /// Create a missing priority error
    pub fn missing_priority<S: Into<String>>(unit: S) -> Self {
        Self::MissingPriority { unit: unit.into() }
    }

    /// Create an invalid priority type error
    pub fn invalid_priority_type<S: Into<String>>(unit: S, found: &'static str) -> Self {
        Self::InvalidPriorityType {
            unit: unit.into(),
            found,
        }
    }

    /// Create a missing configure error
    pub fn missing_configure<S: Into<String>>(unit: S) -> Self {
        Self::MissingConfigure { unit: unit.into() }
    }

    /// Create an invalid configure signature error
    pub fn invalid_configure_signature<S: Into<String>>(unit: S, arity: usize) -> Self {
        Self::InvalidConfigureSignature {
            unit: unit.into(),
            arity,
        }
    }
}

// Lookup and runtime error creation methods
impl Error {
    /// Create an unknown base type error
    pub fn unknown_base_type(base: &'static str) -> Self {
        Self::UnknownBaseType { base }
    }

    /// Create a no implementations found error
    pub fn no_implementations_found(base: &'static str) -> Self {
        Self::NoImplementationsFound { base }
    }

    /// Create a configure failure error
    pub fn configure<S: Into<String>>(unit: S, source: BoxError) -> Self {
        Self::Configure {
            unit: unit.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification
impl Error {
    /// True for the configuration unit validation family
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingPriority { .. }
                | Self::InvalidPriorityType { .. }
                | Self::MissingConfigure { .. }
                | Self::InvalidConfigureSignature { .. }
        )
    }

    /// True for the registry lookup family
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::UnknownBaseType { .. } | Self::NoImplementationsFound { .. }
        )
    }

    /// Name of the configuration unit the error refers to, if any
    pub fn unit_name(&self) -> Option<&str> {
        match self {
            Self::MissingPriority { unit }
            | Self::InvalidPriorityType { unit, .. }
            | Self::MissingConfigure { unit }
            | Self::InvalidConfigureSignature { unit, .. }
            | Self::Configure { unit, .. } => Some(unit),
            _ => None,
        }
    }
}
