// Domain layer: data model and ports. Parsing, calculation and rendering live in core.

pub mod model;
pub mod ports;
