//! Shortest-distance matrices.
//!
//! Provides a dense all-pairs matrix precomputed from the graph service.

mod matrix;

pub use matrix::DistanceMatrix;
