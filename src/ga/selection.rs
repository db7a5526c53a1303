//! Tournament selection.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use crate::best::Direction;
use rand::Rng;

/// Tournament selection: draw `k` individuals uniformly with replacement and
/// return the index of the fittest.
///
/// The first draw is the incumbent and a later draw replaces it only with
/// strictly lower fitness, so ties keep the first pick. `k = 2` is binary
/// tournament.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if Direction::Minimize.improves(population[idx].fitness(), population[best_idx].fitness()) {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct TestInd {
        fit: u64,
    }

    impl Individual for TestInd {
        type Fitness = u64;
        fn fitness(&self) -> u64 {
            self.fit
        }
        fn set_fitness(&mut self, f: u64) {
            self.fit = f;
        }
    }

    fn make_population(fitnesses: &[u64]) -> Vec<TestInd> {
        fitnesses.iter().map(|&f| TestInd { fit: f }).collect()
    }

    #[test]
    fn test_binary_tournament_favors_best() {
        let pop = make_population(&[10, 5, 1, 8]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&pop, 2, &mut rng)] += 1;
        }
        // P(best wins) = 1 - (3/4)^2 = 0.4375; P(worst wins) = (1/4)^2
        assert!(counts[2] > 4000, "best picked too rarely: {counts:?}");
        assert!(counts[0] < 1000, "worst picked too often: {counts:?}");
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[10, 5, 1, 8]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_equal_fitness_is_uniform() {
        let pop = make_population(&[5, 5, 5, 5]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 2, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_tie_keeps_first_draw() {
        let pop = make_population(&[5, 5, 5, 5]);
        let mut rng = create_rng(7);

        let mut distinct_pairs = 0;
        for _ in 0..200 {
            let mut replay = rng.clone();
            let first = replay.random_range(0..pop.len());
            let second = replay.random_range(0..pop.len());

            assert_eq!(tournament(&pop, 2, &mut rng), first);
            if first != second {
                distinct_pairs += 1;
            }
        }
        assert!(distinct_pairs > 100, "too few informative draws: {distinct_pairs}");
    }

    #[test]
    fn test_strictly_better_later_draw_wins() {
        let pop = make_population(&[9, 1, 9, 9]);
        let mut rng = create_rng(8);

        for _ in 0..200 {
            let mut replay = rng.clone();
            let first = replay.random_range(0..pop.len());
            let second = replay.random_range(0..pop.len());
            let expected = if second == 1 { 1 } else { first };

            assert_eq!(tournament(&pop, 2, &mut rng), expected);
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5]);
        let mut rng = create_rng(42);
        assert_eq!(tournament(&pop, 2, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = vec![];
        let mut rng = create_rng(42);
        tournament(&pop, 2, &mut rng);
    }
}
