//! Domain model types for depot collection routing.
//!
//! Provides the problem instance (graph plus load-penalty parameters) and the
//! stop type shared by logical and physical paths.

mod problem;
mod stop;

pub use problem::Problem;
pub use stop::{collected_per_node, Stop};
