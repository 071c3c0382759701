//! Shape models
//!
//! Every shape is built from the JSON fields that accompany its `type`
//! discriminator. Unknown or missing fields are constructor errors.

mod circle;
mod rectangle;
mod square;

use injecty_domain::{BoxError, ExtensionPoint};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;

/// Constructor arguments shared by all shapes
pub type ShapeArgs = Map<String, Value>;

/// A 2D shape
pub trait Shape: std::fmt::Debug {
    /// Area of the shape
    fn area(&self) -> f64;
}

impl ExtensionPoint for dyn Shape {
    type Args = ShapeArgs;

    fn name() -> &'static str {
        "Shape"
    }
}

fn from_args<T: DeserializeOwned>(args: &ShapeArgs) -> Result<T, BoxError> {
    Ok(serde_json::from_value(Value::Object(args.clone()))?)
}
