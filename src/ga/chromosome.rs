//! Bit-string encoding of a subset and its GA problem definition.

use super::operators::{bit_flip_mutation, one_point_crossover, random_bits};
use super::types::{GaProblem, Individual};
use crate::problem::SubsetSum;
use rand::Rng;

/// A GA candidate: one bit per item plus its cached fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    /// Bit `i` set means item `i` is in the subset.
    pub bits: Vec<bool>,

    /// `|target - sum|` of the selected subset; `u64::MAX` until evaluated.
    pub fitness: u64,
}

impl Chromosome {
    /// Wraps a bit string as an unevaluated chromosome.
    pub fn new(bits: Vec<bool>) -> Self {
        Self {
            bits,
            fitness: u64::MAX,
        }
    }
}

impl Individual for Chromosome {
    type Fitness = u64;

    fn fitness(&self) -> u64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: u64) {
        self.fitness = fitness;
    }
}

impl GaProblem for SubsetSum {
    type Individual = Chromosome;

    fn dimension(&self) -> usize {
        self.len()
    }

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        Chromosome::new(random_bits(self.len(), rng))
    }

    fn evaluate(&self, individual: &Chromosome) -> u64 {
        self.distance(&individual.bits)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        let (c1, c2, _) = one_point_crossover(&parent1.bits, &parent2.bits, rng);
        (Chromosome::new(c1), Chromosome::new(c2))
    }

    fn mutate<R: Rng>(&self, individual: &mut Chromosome, rate: f64, rng: &mut R) {
        bit_flip_mutation(&mut individual.bits, rate, rng);
    }

    fn is_optimal(&self, fitness: u64) -> bool {
        fitness == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_create_individual_matches_item_count() {
        let problem = SubsetSum::new(vec![1, 2, 3, 4, 5, 6, 7], 10).unwrap();
        let mut rng = create_rng(5);
        let ind = problem.create_individual(&mut rng);
        assert_eq!(ind.bits.len(), 7);
        assert_eq!(ind.fitness, u64::MAX);
    }

    #[test]
    fn test_evaluate_is_distance() {
        let problem = SubsetSum::new(vec![1, 2, 3], 6).unwrap();
        assert_eq!(problem.evaluate(&Chromosome::new(vec![true, true, true])), 0);
        assert_eq!(problem.evaluate(&Chromosome::new(vec![false, true, false])), 4);
        assert!(problem.is_optimal(0));
        assert!(!problem.is_optimal(1));
    }

    #[test]
    fn test_crossover_children_are_unevaluated() {
        let problem = SubsetSum::new(vec![1, 2, 3, 4], 5).unwrap();
        let mut rng = create_rng(8);
        let mut p1 = Chromosome::new(vec![true; 4]);
        let mut p2 = Chromosome::new(vec![false; 4]);
        p1.set_fitness(5);
        p2.set_fitness(5);

        let (c1, c2) = problem.crossover(&p1, &p2, &mut rng);
        assert_eq!(c1.fitness, u64::MAX);
        assert_eq!(c2.fitness, u64::MAX);
        // every position holds exactly one parent's bit in each child
        for i in 0..4 {
            assert_ne!(c1.bits[i], c2.bits[i]);
        }
    }
}
