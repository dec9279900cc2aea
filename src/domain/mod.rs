// Domain layer: workbench model and the ports the consumption loop talks to.

pub mod model;
pub mod ports;
