// Domain layer: step/report models and the ports the runner talks through.

pub mod model;
pub mod ports;
