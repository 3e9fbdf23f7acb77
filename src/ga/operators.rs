//! Selection, crossover, and mutation operators on visit-order genomes.

use std::collections::HashSet;

use rand::seq::index;
use rand::Rng;

use super::chromosome::Individual;

/// Tournament selection without replacement.
///
/// Draws `size` distinct individuals (or the whole population if smaller)
/// and returns the cheapest. Returns `None` for an empty population.
pub fn tournament<'p, R: Rng>(
    population: &'p [Individual],
    size: usize,
    rng: &mut R,
) -> Option<&'p Individual> {
    if population.is_empty() {
        return None;
    }
    let amount = size.min(population.len());
    index::sample(rng, population.len(), amount)
        .iter()
        .map(|i| &population[i])
        .min_by(|a, b| a.cost().total_cmp(&b.cost()))
}

/// Order crossover (OX1) with random cut points.
///
/// Picks two distinct positions `a < b` and delegates to [`ox1_with_cuts`].
/// Genomes shorter than 2 are returned as a copy of `parent1`.
pub fn order_crossover_ox1<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let size = parent1.len();
    if size < 2 {
        return parent1.to_vec();
    }
    let cuts = index::sample(rng, size, 2);
    let (a, b) = (cuts.index(0), cuts.index(1));
    ox1_with_cuts(parent1, parent2, a.min(b), a.max(b))
}

/// Order crossover (OX1) with fixed cut points.
///
/// The child keeps `parent1[a..b]` in place. The remaining positions are
/// filled from `b` onwards, wrapping to the front, with the genes of
/// `parent2` in `parent2` order, skipping genes already placed.
///
/// # Examples
///
/// ```
/// use u_collect::ga::ox1_with_cuts;
///
/// let child = ox1_with_cuts(&[1, 2, 3, 4], &[4, 3, 2, 1], 1, 3);
/// assert_eq!(&child[1..3], &[2, 3]);
/// assert_eq!(child, vec![1, 2, 3, 4]);
/// ```
pub fn ox1_with_cuts(parent1: &[usize], parent2: &[usize], a: usize, b: usize) -> Vec<usize> {
    let size = parent1.len();
    let mut child: Vec<Option<usize>> = vec![None; size];
    let mut placed: HashSet<usize> = HashSet::with_capacity(size);

    for (slot, &gene) in child[a..b].iter_mut().zip(&parent1[a..b]) {
        *slot = Some(gene);
        placed.insert(gene);
    }

    let mut pos = b;
    for &gene in parent2 {
        if placed.contains(&gene) {
            continue;
        }
        if pos >= size {
            pos = 0;
        }
        child[pos] = Some(gene);
        placed.insert(gene);
        pos += 1;
    }

    child.into_iter().flatten().collect()
}

/// Mutates a genome in place: a position swap or a segment inversion,
/// with equal probability.
///
/// Both moves act on two distinct positions, so a genome of length 2 or
/// more always changes. Shorter genomes are left untouched.
///
/// # Examples
///
/// ```
/// use u_collect::ga::mutate;
///
/// let mut rng = u_numflow::random::create_rng(3);
/// let mut genome = vec![4, 7];
/// mutate(&mut genome, &mut rng);
/// assert_eq!(genome, vec![7, 4]);
/// ```
pub fn mutate<R: Rng>(genome: &mut [usize], rng: &mut R) {
    if genome.len() < 2 {
        return;
    }
    let picks = index::sample(rng, genome.len(), 2);
    let (i, j) = (picks.index(0), picks.index(1));
    if rng.random_range(0..2u64) == 0 {
        genome.swap(i, j);
    } else {
        genome[i.min(j)..=i.max(j)].reverse();
    }
}
