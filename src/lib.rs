//! # u-collect
//!
//! Depot collection routing on weighted graphs where every edge costs its
//! distance plus a penalty growing as a power of the carried load:
//! `d + (alpha · d · load)^beta`. The collector may return to the depot
//! (node 0) at any time to unload.
//!
//! ## Modules
//!
//! - [`models`] — Problem instance and path stops
//! - [`graph`] — Graph service trait and an in-memory implementation
//! - [`distance`] — All-pairs shortest-distance matrix
//! - [`evaluation`] — Cost model, route scoring, and path verification
//! - [`expansion`] — Logical-to-physical path densification
//! - [`constructive`] — Nearest-neighbor seeding
//! - [`local_search`] — Bounded 2-opt over visit orders
//! - [`split`] — Analytic per-node trip splitting strategy
//! - [`ga`] — Memetic search strategy
//!
//! [`Solver`] picks a strategy from `beta` and returns a physical path.

pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod expansion;
pub mod ga;
pub mod graph;
pub mod local_search;
pub mod models;
pub mod split;

mod config;
mod error;
mod solver;

pub use config::SolverConfig;
pub use error::RoutingError;
pub use solver::{solve, SolveReport, Solver, Strategy};
