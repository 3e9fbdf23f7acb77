//! Local search operators for improving visit orders.
//!
//! - [`two_opt`] — Bounded first-improvement segment reversal

mod two_opt;

pub use two_opt::two_opt_bounded;
