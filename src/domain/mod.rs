// Domain layer: report models and the ports (storage, clock) the pipeline depends on.

pub mod model;
pub mod ports;
