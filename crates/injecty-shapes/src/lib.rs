//! Shape Areas
//!
//! A host declares the `dyn Shape` extension point; two configuration units
//! contribute `Circle`, `Square` and `Rectangle`; [`parse_shape`] turns
//! JSON objects carrying a `type` discriminator into shape instances by
//! asking the context for the implementation with that name.

pub mod models;
pub mod parser;
pub mod units;

pub use models::{Circle, Rectangle, Shape, ShapeArgs, Square};
pub use parser::{ParseError, parse_shape, parse_shapes};
