//! Path expansion from logical stops to edge-by-edge walks.

mod densify;

pub use densify::densify;
