use std::f64::consts::PI;

use injecty_domain::{BoxError, Implementation};
use serde::Deserialize;

use super::{Shape, ShapeArgs, from_args};

/// Circle of the given radius
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Circle {
    pub radius: f64,
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}

impl Implementation<dyn Shape> for Circle {
    fn create(args: &ShapeArgs) -> Result<Box<dyn Shape>, BoxError> {
        Ok(Box::new(from_args::<Self>(args)?))
    }
}
