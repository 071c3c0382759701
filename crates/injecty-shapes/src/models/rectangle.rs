use injecty_domain::{BoxError, Implementation};
use serde::Deserialize;

use super::{Shape, ShapeArgs, from_args};

/// Axis-aligned rectangle
///
/// Ranked above `Square` so it is tried first when both could match the
/// same input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rectangle {
    pub length: f64,
    pub height: f64,
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.length * self.height
    }
}

impl Implementation<dyn Shape> for Rectangle {
    const PRIORITY: Option<i32> = Some(10);

    fn create(args: &ShapeArgs) -> Result<Box<dyn Shape>, BoxError> {
        Ok(Box::new(from_args::<Self>(args)?))
    }
}
