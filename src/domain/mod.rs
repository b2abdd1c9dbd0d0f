// Domain layer: the normalized result model and the parameter-source port.

pub mod model;
pub mod ports;
