//! Analytic split strategy: independent depot round trips per node.
//!
//! - [`best_split_count`] — Trip count search for a single node
//! - [`plan_round_trips`] — Logical path of per-node round trips
//! - [`analytic_split`] — Full strategy: plan, then densify

mod analytic;

pub use analytic::{analytic_split, best_split_count, plan_round_trips, SplitChoice};
