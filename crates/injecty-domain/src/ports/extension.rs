//! Extension Point Ports
//!
//! Contracts a host uses to declare extension points and that contributors
//! implement to satisfy them.
//!
//! ## Declaring an extension point
//!
//! ```
//! use injecty_domain::ports::{ExtensionPoint, Implementation};
//! use injecty_domain::error::BoxError;
//!
//! pub trait Greeter {
//!     fn greet(&self) -> String;
//! }
//!
//! impl ExtensionPoint for dyn Greeter {
//!     type Args = ();
//! }
//!
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! impl Implementation<dyn Greeter> for English {
//!     const PRIORITY: Option<i32> = Some(10);
//!
//!     fn create(_: &()) -> Result<Box<dyn Greeter>, BoxError> {
//!         Ok(Box::new(English))
//!     }
//! }
//!
//! assert_eq!(<English as Implementation<dyn Greeter>>::name(), "English");
//! ```

use crate::error::BoxError;

/// An extension point that implementations are registered against.
///
/// Usually implemented for a trait object type (`impl ExtensionPoint for dyn
/// Shape`), so that instantiation yields `Box<dyn Shape>`.
pub trait ExtensionPoint: 'static {
    /// Arguments forwarded to every implementation constructor.
    type Args: ?Sized;

    /// Ordering hint used for implementations that declare no priority.
    const DEFAULT_PRIORITY: Option<i32> = None;

    /// Display name used in logs and errors.
    fn name() -> &'static str {
        short_type_name::<Self>()
    }
}

/// A concrete type that satisfies the extension point `B`.
pub trait Implementation<B: ExtensionPoint + ?Sized>: 'static {
    /// Ordering hint; higher values are preferred by the default sort.
    const PRIORITY: Option<i32> = None;

    /// Display name, also used by discriminator-based selection.
    fn name() -> &'static str {
        short_type_name::<Self>()
    }

    /// Construct a new instance from the extension point's arguments.
    fn create(args: &B::Args) -> Result<Box<B>, BoxError>;
}

/// Last path segment of a type name, keeping generic arguments intact.
///
/// `app::models::Square` becomes `Square`. Trait objects keep their
/// qualified path (`dyn app::Shape`); override [`ExtensionPoint::name`] for a
/// shorter label.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    shorten(std::any::type_name::<T>())
}

fn shorten(full: &'static str) -> &'static str {
    if full.starts_with("dyn ") {
        return full;
    }
    let head_len = full.find('<').unwrap_or(full.len());
    match full[..head_len].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
