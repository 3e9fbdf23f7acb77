//! Bounded 2-opt over visit-order genomes.
//!
//! # Algorithm
//!
//! Scan position pairs `(i, j)` with `i < j`, reverse `genome[i..=j]`, and
//! re-evaluate the full genome (depot returns included). The first strictly
//! improving reversal is accepted and the scan restarts from the top
//! (first-improvement). The total number of evaluations is capped, after
//! which the best genome found so far is returned.
//!
//! # Complexity
//!
//! O(max_checks · n) — each check is a full O(n) fitness walk.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::ga::Fitness;

/// Improves a genome with bounded first-improvement 2-opt.
///
/// Returns the improved genome and its cost. The result is never worse
/// than the input.
///
/// # Examples
///
/// ```
/// use u_collect::distance::DistanceMatrix;
/// use u_collect::evaluation::CostModel;
/// use u_collect::ga::Fitness;
/// use u_collect::local_search::two_opt_bounded;
///
/// // Line 0 — 1 — 2 — 3 with unit edges
/// let mut data = vec![0.0; 16];
/// for i in 0..4 {
///     for j in 0..4 {
///         data[i * 4 + j] = (i as f64 - j as f64).abs();
///     }
/// }
/// let dm = DistanceMatrix::from_data(4, data).unwrap();
/// let gold = [0.0, 1.0, 1.0, 1.0];
/// let fitness = Fitness::new(&dm, &gold, CostModel::new(1.0, 1.0));
///
/// let start = vec![2, 1, 3];
/// let (improved, cost) = two_opt_bounded(&start, &fitness, 200);
/// assert!(cost <= fitness.cost(&start));
/// assert_eq!(improved.len(), 3);
/// ```
pub fn two_opt_bounded(
    genome: &[usize],
    fitness: &Fitness<'_>,
    max_checks: usize,
) -> (Vec<usize>, f64) {
    let n = genome.len();
    let mut best = genome.to_vec();
    let mut best_cost = fitness.cost(&best);
    let mut checks = 0;
    let mut improved = true;

    'search: while improved && checks < max_checks {
        improved = false;
        for i in 0..n.saturating_sub(1) {
            for j in i + 1..n {
                checks += 1;
                if checks > max_checks {
                    break 'search;
                }
                let mut candidate = best.clone();
                candidate[i..=j].reverse();
                let cost = fitness.cost(&candidate);
                if cost < best_cost {
                    best = candidate;
                    best_cost = cost;
                    improved = true;
                    continue 'search;
                }
            }
        }
    }

    (best, best_cost)
}
