// Domain layer: pipeline data model and ports (host interfaces).

pub mod model;
pub mod ports;
