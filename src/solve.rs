//! One-call entry points for a shell: items and target in, subset out.

use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};
use crate::problem::SubsetSum;
use crate::pso::{PsoConfig, PsoRunner};

/// Best subset found by a solver.
///
/// `fitness` keeps the solver's own polarity: `u64` distance (lower is
/// better) for the GA, `i64` closeness (higher is better) for the swarm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<F> {
    /// Selected items in their original order.
    pub subset: Vec<i64>,

    /// Sum of `subset`.
    pub sum: i64,

    /// Solver-specific fitness of `subset`.
    pub fitness: F,

    /// Whether `sum` equals the target.
    pub exact: bool,

    /// Generations or sweeps executed.
    pub iterations: usize,

    /// Best fitness after each generation or sweep.
    pub fitness_history: Vec<f64>,
}

/// Runs the GA on `items` and `target`.
///
/// ```
/// use u_subsetsum::{solve_genetic, ga::GaConfig};
///
/// let solution = solve_genetic(vec![1, 2, 3], 6, &GaConfig::default().with_seed(1)).unwrap();
/// assert_eq!(solution.fitness, 0);
/// assert_eq!(solution.subset, vec![1, 2, 3]);
/// ```
pub fn solve_genetic(items: Vec<i64>, target: i64, config: &GaConfig) -> Result<Solution<u64>> {
    let problem = SubsetSum::new(items, target)?;
    let result = GaRunner::run(&problem, config)?;
    let sum = problem.sum(&result.best.bits);
    Ok(Solution {
        subset: problem.decode(&result.best.bits),
        sum,
        fitness: result.best_fitness,
        exact: sum == target,
        iterations: result.generations,
        fitness_history: result.fitness_history,
    })
}

/// Runs the particle swarm on `items` and `target`.
pub fn solve_swarm(items: Vec<i64>, target: i64, config: &PsoConfig) -> Result<Solution<i64>> {
    let problem = SubsetSum::new(items, target)?;
    let result = PsoRunner::run(&problem, config)?;
    let sum = problem.sum(&result.best_position);
    Ok(Solution {
        subset: problem.decode(&result.best_position),
        sum,
        fitness: result.best_fitness,
        exact: sum == target,
        iterations: result.iterations,
        fitness_history: result.fitness_history.iter().map(|&f| f as f64).collect(),
    })
}
