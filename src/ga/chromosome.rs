//! Visit-order individual for the memetic search.
//!
//! A genome is a permutation of the gold-holding nodes (depot excluded). Its
//! cost and phenotype (the logical path with depot returns) are computed once
//! at construction; changing the order means building a new individual.

use super::fitness::Fitness;
use crate::models::Stop;

/// An evaluated visit order.
///
/// Lower cost = better solution.
///
/// # Examples
///
/// ```
/// use u_collect::distance::DistanceMatrix;
/// use u_collect::evaluation::CostModel;
/// use u_collect::ga::{Fitness, Individual};
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
/// let gold = [0.0, 2.0];
/// let fitness = Fitness::new(&dm, &gold, CostModel::new(1.0, 1.0));
///
/// let ind = Individual::new(vec![1], &fitness);
/// assert_eq!(ind.genome(), &[1]);
/// // 1 out empty, 1 + 1·1·2 back
/// assert!((ind.cost() - 4.0).abs() < 1e-10);
/// assert_eq!(ind.phenotype().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Individual {
    genome: Vec<usize>,
    cost: f64,
    phenotype: Vec<Stop>,
}

impl Individual {
    /// Evaluates `genome` and wraps it with its cost and phenotype.
    pub fn new(genome: Vec<usize>, fitness: &Fitness<'_>) -> Self {
        let (cost, phenotype) = fitness.evaluate(&genome);
        Self {
            genome,
            cost,
            phenotype,
        }
    }

    /// Returns the visit order.
    pub fn genome(&self) -> &[usize] {
        &self.genome
    }

    /// Returns the total cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns the logical path with depot returns.
    pub fn phenotype(&self) -> &[Stop] {
        &self.phenotype
    }

    /// Consumes the individual, returning its logical path.
    pub fn into_phenotype(self) -> Vec<Stop> {
        self.phenotype
    }

    /// Returns the number of nodes in the genome.
    pub fn len(&self) -> usize {
        self.genome.len()
    }

    /// Returns true if the genome is empty.
    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }
}

/// Sorts a population by ascending cost.
pub fn sort_by_cost(population: &mut [Individual]) {
    population.sort_by(|a, b| a.cost.total_cmp(&b.cost));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::evaluation::CostModel;

    fn matrix() -> DistanceMatrix {
        DistanceMatrix::from_data(3, vec![0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0])
            .expect("valid")
    }

    #[test]
    fn test_cost_matches_fitness() {
        let dm = matrix();
        let gold = [0.0, 1.0, 4.0];
        let f = Fitness::new(&dm, &gold, CostModel::new(1.0, 1.0));
        let ind = Individual::new(vec![2, 1], &f);
        let (cost, path) = f.evaluate(&[2, 1]);
        assert_eq!(ind.cost(), cost);
        assert_eq!(ind.phenotype(), path.as_slice());
        assert_eq!(ind.len(), 2);
        assert!(!ind.is_empty());
    }

    #[test]
    fn test_sort_by_cost() {
        let dm = matrix();
        let gold = [0.0, 1.0, 4.0];
        let f = Fitness::new(&dm, &gold, CostModel::new(1.0, 2.0));
        let mut pop = vec![
            Individual::new(vec![1, 2], &f),
            Individual::new(vec![2, 1], &f),
        ];
        sort_by_cost(&mut pop);
        assert!(pop[0].cost() <= pop[1].cost());
    }

    #[test]
    fn test_empty_individual() {
        let dm = matrix();
        let gold = [0.0, 0.0, 0.0];
        let f = Fitness::new(&dm, &gold, CostModel::new(1.0, 1.0));
        let ind = Individual::new(vec![], &f);
        assert!(ind.is_empty());
        assert_eq!(ind.cost(), 0.0);
        assert!(ind.into_phenotype().is_empty());
    }
}
