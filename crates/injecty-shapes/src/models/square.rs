use injecty_domain::{BoxError, Implementation};
use serde::Deserialize;

use super::{Shape, ShapeArgs, from_args};

/// Square with sides of `length`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Square {
    pub length: f64,
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.length.powi(2)
    }
}

impl Implementation<dyn Shape> for Square {
    const PRIORITY: Option<i32> = Some(0);

    fn create(args: &ShapeArgs) -> Result<Box<dyn Shape>, BoxError> {
        Ok(Box::new(from_args::<Self>(args)?))
    }
}
