//! GA generational loop.
//!
//! [`GaRunner`] drives the whole run:
//! initialization → selection → pairwise crossover → mutation → replace → repeat.
//!
//! Replacement is generational and non-elitist: the best individual of a
//! generation survives only if selection and variation reproduce it.

use super::config::GaConfig;
use super::selection::tournament;
use super::types::{Fitness, GaProblem, Individual};
use crate::best::{best_index, Direction};
use crate::error::{Result, SolverError};
use crate::random::rng_from;
use tracing::{debug, info};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual of the final population.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped early on an optimal individual.
    pub optimal: bool,

    /// Best fitness of each generation's population, in order.
    pub fitness_history: Vec<f64>,

    /// The final population, evaluated.
    pub population: Vec<I>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use u_subsetsum::ga::{GaConfig, GaRunner};
/// use u_subsetsum::SubsetSum;
///
/// let problem = SubsetSum::new(vec![1, 2, 3], 6).unwrap();
/// let config = GaConfig::default().with_population_size(10).with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best_fitness, 0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidConfiguration`] if the configuration is
    /// invalid or the problem has zero dimension. Nothing is evaluated in
    /// that case.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        config.validate()?;
        let dimension = problem.dimension();
        if dimension == 0 {
            return Err(SolverError::config("problem dimension must be positive"));
        }

        let mut rng = rng_from(config.seed);

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(problem, &mut population);

        let mut fitness_history = Vec::with_capacity(config.max_generations);
        let mut generations = 0;
        let mut optimal = false;

        // 2. Generational loop
        for gen in 0..config.max_generations {
            // Selection
            let selected: Vec<usize> = (0..config.population_size)
                .map(|_| tournament(&population, config.tournament_size, &mut rng))
                .collect();

            // Crossover over adjacent pairs
            let mut offspring: Vec<P::Individual> = Vec::with_capacity(config.population_size);
            for pair in selected.chunks_exact(2) {
                let (c1, c2) = problem.crossover(&population[pair[0]], &population[pair[1]], &mut rng);
                offspring.push(c1);
                offspring.push(c2);
            }

            // Mutation
            for child in offspring.iter_mut() {
                problem.mutate(child, config.mutation_rate, &mut rng);
            }

            // Replacement
            evaluate_population(problem, &mut offspring);
            debug_assert_eq!(offspring.len(), config.population_size);
            population = offspring;
            generations = gen + 1;

            let best_fitness = population[find_best(&population)].fitness();
            fitness_history.push(best_fitness.to_f64());
            problem.on_generation(generations, best_fitness);
            debug!(generation = generations, best_fitness = ?best_fitness, "generation complete");

            if problem.is_optimal(best_fitness) {
                optimal = true;
                break;
            }
        }

        let best = population[find_best(&population)].clone();
        info!(
            generations,
            optimal,
            best_fitness = ?best.fitness(),
            "genetic search finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            optimal,
            fitness_history,
            population,
        })
    }
}

/// Evaluate all individuals in the population.
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Index of the individual with the lowest fitness, earliest on ties.
fn find_best<I: Individual>(population: &[I]) -> usize {
    best_index(population, Direction::Minimize, |ind| ind.fitness()).unwrap_or(0)
}

// ============================================================================
// Tests
// ============================================================================
