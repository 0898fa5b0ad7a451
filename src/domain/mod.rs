// Domain layer: the clock value type, the shop collection, and the time source port.

pub mod clock;
pub mod ports;
pub mod shop;
