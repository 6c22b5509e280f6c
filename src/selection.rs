//! Selection strategies for choosing parent pairs.
//!
//! Selection determines which two individuals become the parents of each
//! mating event. Both strategies sample with replacement, so a pair may
//! contain the same individual twice.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::types::{Chromosome, Fitness};
use rand::Rng;

/// Strategy for selecting two parents from the population.
///
/// Both strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use evo_engine::Selection;
///
/// // Subset competition, robust to negative fitness
/// let sel = Selection::Tournament;
///
/// // Fitness-proportionate sampling
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Each parent is drawn independently with probability proportional to
    /// its raw fitness.
    ///
    /// **Contract**: all fitness values must be non-negative, otherwise the
    /// weight vector is not a valid distribution. This is documented, not
    /// validated; shift your scores or use [`Selection::Tournament`] for
    /// problems with negative fitness.
    ///
    /// # Complexity
    /// O(n) per pair (linear scan)
    Roulette,

    /// Tournament selection.
    ///
    /// Samples `population_len / 2` individuals uniformly with replacement
    /// and returns the top two by fitness, stable by sampling order on
    /// ties. For populations of 2 or 3 the tournament degenerates to a
    /// single contender, which is returned as both parents.
    ///
    /// # Complexity
    /// O(n) per pair
    Tournament,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament
    }
}

impl Selection {
    /// Selects two parent indices from the population.
    ///
    /// The first index always refers to an individual with fitness greater
    /// than or equal to the second's under [`Selection::Tournament`].
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select_pair<C: Chromosome, R: Rng>(
        &self,
        population: &[C],
        rng: &mut R,
    ) -> (usize, usize) {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Roulette => roulette_pair(population, rng),
            Selection::Tournament => tournament_pair(population, rng),
        }
    }
}

/// Tournament: sample `n / 2` contenders, keep a running top-two.
///
/// Strict comparisons keep earlier-sampled contenders ahead of later
/// equal-fitness ones.
fn tournament_pair<C: Chromosome, R: Rng>(population: &[C], rng: &mut R) -> (usize, usize) {
    let n = population.len();
    let k = n / 2;

    let mut first = rng.random_range(0..n);
    let mut second = None;
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[first].fitness() {
            second = Some(first);
            first = idx;
        } else if second.map_or(true, |s| population[idx].fitness() > population[s].fitness()) {
            second = Some(idx);
        }
    }

    // k < 2 leaves a single contender; it then serves as both parents
    (first, second.unwrap_or(first))
}

/// Roulette: two independent fitness-proportionate draws with replacement.
fn roulette_pair<C: Chromosome, R: Rng>(population: &[C], rng: &mut R) -> (usize, usize) {
    let weights: Vec<f64> = population
        .iter()
        .map(|c| c.fitness().to_f64())
        .collect();
    let total: f64 = weights.iter().sum();

    (
        spin_wheel(&weights, total, rng),
        spin_wheel(&weights, total, rng),
    )
}

/// One spin of the roulette wheel: cumulative scan against a random threshold.
fn spin_wheel<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let n = weights.len();
    if total <= 0.0 {
        // degenerate wheel (all-zero fitness): fall back to a uniform draw
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Clone)]
    struct TestInd {
        fit: f64,
    }

    impl Chromosome for TestInd {
        type Fitness = f64;

        fn fitness(&self) -> f64 {
            self.fit
        }

        fn random<R: Rng>(rng: &mut R) -> Self {
            TestInd {
                fit: rng.random_range(0.0..1.0),
            }
        }

        fn crossover<R: Rng>(&self, other: &Self, _rng: &mut R) -> (Self, Self) {
            (self.clone(), other.clone())
        }

        fn mutate<R: Rng>(&mut self, _rng: &mut R) {}
    }

    fn make_population(fitnesses: &[f64]) -> Vec<TestInd> {
        fitnesses.iter().map(|&f| TestInd { fit: f }).collect()
    }

    #[test]
    fn test_tournament_pair_is_ordered() {
        let pop = make_population(&[3.0, 9.0, 1.0, 7.0, 5.0, 2.0, 8.0, 4.0]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let (a, b) = Selection::Tournament.select_pair(&pop, &mut rng);
            assert!(
                pop[a].fitness() >= pop[b].fitness(),
                "first parent must not be weaker: {} < {}",
                pop[a].fitness(),
                pop[b].fitness()
            );
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[1.0, 5.0, 10.0, 8.0, 2.0, 3.0, 4.0, 6.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 8];
        let n = 10000;
        for _ in 0..n {
            let (a, _) = Selection::Tournament.select_pair(&pop, &mut rng);
            counts[a] += 1;
        }
        // Index 2 (fitness=10.0) should be the most frequent first parent
        let best_count = counts[2];
        for (i, &c) in counts.iter().enumerate() {
            if i != 2 {
                assert!(
                    best_count > c,
                    "best should lead as first parent, got counts {counts:?}"
                );
            }
        }
    }

    #[test]
    fn test_tournament_degenerate_population_of_two() {
        let pop = make_population(&[1.0, 2.0]);
        let mut rng = StdRng::seed_from_u64(42);

        // k truncates to 1: single contender returned as both parents
        for _ in 0..100 {
            let (a, b) = Selection::Tournament.select_pair(&pop, &mut rng);
            assert_eq!(a, b);
            assert!(a < pop.len());
        }
    }

    #[test]
    fn test_tournament_tie_break_is_stable() {
        // All-equal fitness: the first sampled contender stays first
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0, 5.0, 5.0]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let (a, b) = Selection::Tournament.select_pair(&pop, &mut rng);
            assert!(a < pop.len() && b < pop.len());
            assert!(pop[a].fitness() >= pop[b].fitness());
        }
    }

    #[test]
    fn test_roulette_favors_high_fitness() {
        let pop = make_population(&[1.0, 1.0, 1.0, 97.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let draws = 10000;
        for _ in 0..draws {
            let (a, b) = Selection::Roulette.select_pair(&pop, &mut rng);
            counts[a] += 1;
            counts[b] += 1;
        }
        // Index 3 holds 97% of the total weight over 20000 draws
        assert!(
            counts[3] > 18000,
            "expected ~97% of draws on index 3, got {counts:?}"
        );
    }

    #[test]
    fn test_roulette_equal_weights_is_uniform() {
        // Chi-square goodness of fit against the uniform expectation,
        // 20000 draws over 4 buckets, df=3, p=0.001 critical value 16.266
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u64; 4];
        let pairs = 10000;
        for _ in 0..pairs {
            let (a, b) = Selection::Roulette.select_pair(&pop, &mut rng);
            counts[a] += 1;
            counts[b] += 1;
        }

        let expected = (2 * pairs) as f64 / 4.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(
            chi_square < 16.266,
            "selection frequencies {counts:?} deviate from uniform, chi2={chi_square}"
        );
    }

    #[test]
    fn test_roulette_zero_total_falls_back_to_uniform() {
        let pop = make_population(&[0.0, 0.0, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = [false; 4];
        for _ in 0..1000 {
            let (a, b) = Selection::Roulette.select_pair(&pop, &mut rng);
            seen[a] = true;
            seen[b] = true;
        }
        assert!(seen.iter().all(|&s| s), "all indices should be reachable");
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = vec![];
        let mut rng = StdRng::seed_from_u64(42);
        Selection::Tournament.select_pair(&pop, &mut rng);
    }
}
