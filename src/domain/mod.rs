// Domain layer: blocklist models and ports (interfaces).

pub mod model;
pub mod ports;
