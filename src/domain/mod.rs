// Domain layer: the book entity, commands, and the strategy ports it delegates to.

pub mod model;
pub mod ports;
