//! Swarm execution loop.

use super::config::PsoConfig;
use super::types::{Particle, PsoProblem};
use crate::best::{best_index, Direction};
use crate::error::{Result, SolverError};
use crate::random::rng_from;
use rand::Rng;
use tracing::{debug, info};

/// Result of a swarm run.
#[derive(Debug, Clone)]
pub struct PsoResult {
    /// Position of the global-best particle after the last sweep.
    pub best_position: Vec<bool>,

    /// Fitness of `best_position`.
    pub best_fitness: i64,

    /// Number of sweeps executed.
    pub iterations: usize,

    /// Global-best fitness after each sweep.
    pub fitness_history: Vec<i64>,

    /// Final state of every particle.
    pub swarm: Vec<Particle>,
}

/// Executes the binary particle swarm.
///
/// # Usage
///
/// ```
/// use u_subsetsum::pso::{PsoConfig, PsoRunner};
/// use u_subsetsum::SubsetSum;
///
/// let problem = SubsetSum::new(vec![3, 34, 4, 12, 5, 2], 9).unwrap();
/// let result = PsoRunner::run(&problem, &PsoConfig::default().with_seed(42)).unwrap();
/// assert!(result.best_fitness <= 9);
/// assert_eq!(result.iterations, 100);
/// ```
pub struct PsoRunner;

impl PsoRunner {
    /// Runs the swarm for `config.max_iterations` sweeps.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidConfiguration`] if the configuration is
    /// invalid or the problem has zero dimension.
    pub fn run<P: PsoProblem>(problem: &P, config: &PsoConfig) -> Result<PsoResult> {
        config.validate()?;
        let dimension = problem.dimension();
        if dimension == 0 {
            return Err(SolverError::config("problem dimension must be positive"));
        }

        let mut rng = rng_from(config.seed);

        // Initialize. Particles are not evaluated here: every fitness starts at 0.
        let mut swarm: Vec<Particle> = (0..config.swarm_size)
            .map(|_| Particle::random(dimension, &mut rng))
            .collect();
        let mut global = global_best(&swarm);

        let mut fitness_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            sweep(problem, &mut swarm, global, config, &mut rng);

            global = global_best(&swarm);
            let best_fitness = swarm[global].fitness;
            fitness_history.push(best_fitness);
            problem.on_iteration(iteration + 1, best_fitness);
            debug!(iteration = iteration + 1, best_fitness, leader = global, "sweep complete");
        }

        let best = &swarm[global];
        info!(
            iterations = config.max_iterations,
            best_fitness = best.fitness,
            "swarm search finished"
        );

        Ok(PsoResult {
            best_position: best.position.clone(),
            best_fitness: best.fitness,
            iterations: config.max_iterations,
            fitness_history,
            swarm,
        })
    }
}

/// Moves every particle once, in index order.
///
/// The leader is a particle, not a snapshot: once it has moved earlier in
/// this sweep, later particles steer toward its new position.
fn sweep<P: PsoProblem, R: Rng>(
    problem: &P,
    swarm: &mut [Particle],
    leader: usize,
    config: &PsoConfig,
    rng: &mut R,
) {
    for idx in 0..swarm.len() {
        let global_best = swarm[leader].position.clone();
        let particle = &mut swarm[idx];

        particle.update_velocity(&global_best, config, rng);
        particle.update_position();
        let fitness = problem.evaluate(&particle.position);
        particle.record_fitness(fitness);
    }
}

/// Index of the particle with the highest current fitness, lowest index on
/// ties.
fn global_best(swarm: &[Particle]) -> usize {
    best_index(swarm, Direction::Maximize, |p| p.fitness).unwrap_or(0)
}
