// Domain layer: immutable value objects. No I/O, no ambient state.

pub mod calendar;
pub mod model;
