// Domain layer: content model and ports (interfaces).

pub mod content;
pub mod model;
pub mod ports;
