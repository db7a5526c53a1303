//! Stochastic subset-sum approximation.
//!
//! Given a multiset of integers and a target, find a subset whose sum comes
//! as close to the target as possible. Two independent metaheuristics search
//! the space of bit-encoded subsets:
//!
//! - **Genetic Algorithm ([`ga`])**: generational, non-elitist GA with binary
//!   tournament selection, one-point crossover over adjacent pairs, and
//!   per-bit mutation. Fitness is `|target - sum|` (minimized) and the run
//!   stops early on an exact match.
//! - **Particle Swarm ([`pso`])**: continuous PSO velocity equations applied
//!   to bits with parity discretization. Fitness is
//!   `target - |target - sum|` (maximized) and the run always uses its full
//!   iteration budget.
//!
//! Both share the [`SubsetSum`] model and the [`best`] extremum scan. Every
//! run takes an optional seed; the same seed and parameters reproduce the
//! same run.
//!
//! ```
//! use u_subsetsum::{solve_genetic, solve_swarm, ga::GaConfig, pso::PsoConfig};
//!
//! let items = vec![3, 34, 4, 12, 5, 2];
//! let ga = solve_genetic(items.clone(), 9, &GaConfig::default().with_seed(7)).unwrap();
//! assert_eq!(ga.sum, 9);
//!
//! let pso = solve_swarm(items, 9, &PsoConfig::default().with_seed(7)).unwrap();
//! assert!(pso.fitness <= 9);
//! ```

pub mod best;
pub mod error;
pub mod ga;
pub mod input;
pub mod problem;
pub mod pso;
pub mod random;
mod solve;

pub use error::{Result, SolverError};
pub use problem::SubsetSum;
pub use solve::{solve_genetic, solve_swarm, Solution};
