//! Solver tuning parameters.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// Tunable parameters for both strategies and the strategy selector.
///
/// Every field has a default, so partial configurations deserialize cleanly.
///
/// # Examples
///
/// ```
/// use u_collect::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_population_size(20)
///     .with_generations(50);
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.tournament_size, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Individuals per generation, elite included.
    pub population_size: usize,
    /// Number of generations; the search never stops early.
    pub generations: usize,
    /// Individuals drawn (without replacement) per tournament.
    pub tournament_size: usize,
    /// Probability that a child is mutated.
    pub mutation_rate: f64,
    /// Probability that a child is bred by OX1 rather than copied.
    pub crossover_rate: f64,
    /// Local search runs only in generations divisible by this value.
    pub local_search_frequency: usize,
    /// Per-child chance of local search in an eligible generation.
    pub local_search_probability: f64,
    /// Upper bound (exclusive) on trips per node in the analytic split.
    pub split_search_limit: usize,
    /// Split counts above this stop at the first non-improving value.
    pub split_patience_after: usize,
    /// Total genome evaluations allowed per 2-opt call.
    pub two_opt_max_checks: usize,
    /// Gold at or below this is treated as nothing to collect by the split.
    pub gold_epsilon: f64,
    /// `beta` at or below this selects the memetic search.
    pub beta_threshold: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            generations: 100,
            tournament_size: 3,
            mutation_rate: 0.2,
            crossover_rate: 0.8,
            local_search_frequency: 5,
            local_search_probability: 0.2,
            split_search_limit: 500,
            split_patience_after: 10,
            two_opt_max_checks: 200,
            gold_epsilon: 1e-9,
            beta_threshold: 1.0,
        }
    }
}

impl SolverConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the generation stride for local search.
    pub fn with_local_search_frequency(mut self, frequency: usize) -> Self {
        self.local_search_frequency = frequency;
        self
    }

    /// Sets the per-child local search probability.
    pub fn with_local_search_probability(mut self, probability: f64) -> Self {
        self.local_search_probability = probability;
        self
    }

    /// Sets the exclusive upper bound on split counts.
    pub fn with_split_search_limit(mut self, limit: usize) -> Self {
        self.split_search_limit = limit;
        self
    }

    /// Sets the 2-opt evaluation budget.
    pub fn with_two_opt_max_checks(mut self, checks: usize) -> Self {
        self.two_opt_max_checks = checks;
        self
    }

    /// Sets the beta threshold used by the strategy selector.
    pub fn with_beta_threshold(mut self, threshold: f64) -> Self {
        self.beta_threshold = threshold;
        self
    }

    /// Checks that sizes are nonzero and probabilities lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), RoutingError> {
        let counts = [
            ("population_size", self.population_size),
            ("tournament_size", self.tournament_size),
            ("local_search_frequency", self.local_search_frequency),
            ("split_search_limit", self.split_search_limit),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(RoutingError::InvalidParameter(format!(
                    "{name} must be at least 1"
                )));
            }
        }

        let rates = [
            ("mutation_rate", self.mutation_rate),
            ("crossover_rate", self.crossover_rate),
            ("local_search_probability", self.local_search_probability),
        ];
        for (name, value) in rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(RoutingError::InvalidParameter(format!(
                    "{name} must lie in [0, 1], got {value}"
                )));
            }
        }

        if !self.gold_epsilon.is_finite() || self.gold_epsilon < 0.0 {
            return Err(RoutingError::InvalidParameter(format!(
                "gold_epsilon must be finite and nonnegative, got {}",
                self.gold_epsilon
            )));
        }
        if self.beta_threshold.is_nan() {
            return Err(RoutingError::InvalidParameter(
                "beta_threshold must not be NaN".into(),
            ));
        }
        Ok(())
    }
}
