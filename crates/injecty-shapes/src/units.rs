//! Configuration units contributing the shape implementations
//!
//! Both units share priority 100, so their relative order is whatever
//! discovery yields; the shapes themselves carry the ordering.

use injecty::{ConfigurationUnit, ImplType, InjectyContext};
use injecty_domain::BoxError;

use crate::models::{Circle, Rectangle, Shape, Square};

/// Unit priority of the bundled shape units
pub const SHAPE_UNIT_PRIORITY: i32 = 100;

fn configure_shapes(context: &mut InjectyContext) -> Result<(), BoxError> {
    context.register_impls(&[
        ImplType::<dyn Shape>::of::<Circle>(),
        ImplType::<dyn Shape>::of::<Square>(),
    ]);
    Ok(())
}

fn configure_rectangle(context: &mut InjectyContext) -> Result<(), BoxError> {
    context.register_impl::<dyn Shape, Rectangle>();
    Ok(())
}

/// Registers `Circle` and `Square`
#[linkme::distributed_slice(injecty::CONFIGURATION_UNITS)]
pub static SHAPES_UNIT: ConfigurationUnit =
    ConfigurationUnit::new("injecty_config_shapes", SHAPE_UNIT_PRIORITY, configure_shapes);

/// Registers `Rectangle`
#[linkme::distributed_slice(injecty::CONFIGURATION_UNITS)]
pub static RECTANGLE_UNIT: ConfigurationUnit = ConfigurationUnit::new(
    "injecty_config_rectangle",
    SHAPE_UNIT_PRIORITY,
    configure_rectangle,
);
