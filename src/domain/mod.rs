// Domain layer: value types, brewing constants and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod units;
