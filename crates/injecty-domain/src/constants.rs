//! Domain layer constants
//!
//! Contains constants shared by the registry engine and by configuration
//! units. Settings-related constants live in `injecty::constants`.

// ============================================================================
// PRIORITY CONSTANTS
// ============================================================================

/// Priority assumed for an implementation that declares none and whose base
/// declares no default
pub const DEFAULT_IMPL_PRIORITY: i32 = 0;

/// Parameter count a configure procedure must accept (the context)
pub const CONFIGURE_MIN_ARITY: usize = 1;

// ============================================================================
// DISCOVERY CONSTANTS
// ============================================================================

/// Conventional name prefix of configuration units
pub const DEFAULT_UNIT_PREFIX: &str = "injecty_config";
