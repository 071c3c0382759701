//! Domain Port Interfaces
//!
//! Traits the host and contributors implement. The registry engine in the
//! `injecty` crate is written purely against these contracts.

pub mod extension;

pub use extension::{ExtensionPoint, Implementation, short_type_name};
