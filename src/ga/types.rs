//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`GaProblem`] are the contract between the
//! generational loop in [`GaRunner`](super::GaRunner) and a concrete
//! encoding. The subset-sum bit-string encoding lives in
//! [`chromosome`](super::chromosome).

use rand::Rng;

/// Marker trait for fitness values.
///
/// Lower fitness is considered better (minimization).
pub trait Fitness: PartialOrd + Copy + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for the per-generation trace.
    fn to_f64(self) -> f64;
}

impl Fitness for u64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The runner calls
/// [`GaProblem::evaluate`] and stores the result via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone {
    /// The fitness type.
    type Fitness: Fitness;

    /// Returns the cached fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Stores a freshly evaluated fitness.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// The runner owns the loop (selection, pairing, replacement, termination);
/// the problem supplies initialization, evaluation, and the variation
/// operators for its encoding.
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Length of every individual's encoding.
    ///
    /// A zero-length problem is rejected before the loop starts.
    fn dimension(&self) -> usize;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual. Lower is better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Recombines two parents into two children.
    ///
    /// The default implementation returns clones of both parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        _rng: &mut R,
    ) -> (Self::Individual, Self::Individual) {
        (parent1.clone(), parent2.clone())
    }

    /// Mutates an individual in place; `rate` is the per-gene probability.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rate: f64, _rng: &mut R) {}

    /// Returns `true` if no individual can do better than `fitness`.
    ///
    /// The runner stops as soon as a generation's best is optimal.
    fn is_optimal(&self, _fitness: <Self::Individual as Individual>::Fitness) -> bool {
        false
    }

    /// Called at the end of each generation with that generation's best
    /// fitness.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
