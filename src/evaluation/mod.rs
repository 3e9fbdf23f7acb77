//! Cost evaluation for collection routes.
//!
//! - [`CostModel`] — Per-edge cost under load: `d + (alpha · d · L)^beta`
//! - [`evaluate_segment_cost`] / [`evaluate_route_cost`] — Scoring of physical paths
//! - [`verify_path`] — Adjacency and gold-conservation checks

mod cost;
mod scoring;

pub use cost::CostModel;
pub use scoring::{
    evaluate_route_cost, evaluate_segment_cost, verify_path, Improvement, GOLD_TOLERANCE,
};
