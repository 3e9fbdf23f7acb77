//! Memetic search over visit orders.
//!
//! - [`Individual`] — Immutable evaluated genome (visit-order permutation)
//! - [`Fitness`] — Genome evaluation with greedy depot returns ([`decide_leg`])
//! - [`ox1_with_cuts`], [`mutate`], [`tournament`] — Genetic operators
//! - [`MemeticSearch`] / [`memetic_search`] — Generational loop and full strategy

mod chromosome;
mod fitness;
mod memetic;
mod operators;

pub use chromosome::{sort_by_cost, Individual};
pub use fitness::{decide_leg, Fitness, Leg, LegDecision};
pub use memetic::{memetic_search, MemeticSearch};
pub use operators::{mutate, order_crossover_ox1, ox1_with_cuts, tournament};
