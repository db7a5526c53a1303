//! Genetic Algorithm for subset sum.
//!
//! A generational, non-elitist GA over bit-strings. The loop in
//! [`GaRunner`] is generic over [`GaProblem`]; [`SubsetSum`](crate::SubsetSum)
//! implements it with the [`Chromosome`] encoding.
//!
//! Each generation:
//!
//! 1. Binary tournament selection fills `population_size` parent slots.
//! 2. Adjacent slots (0&1, 2&3, ...) are recombined by one-point crossover.
//! 3. Every offspring bit flips with probability `mutation_rate`.
//! 4. The offspring replace the whole population.
//!
//! The run stops after `max_generations` or as soon as a generation's best
//! fitness is 0.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use chromosome::Chromosome;
pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
pub use types::{Fitness, GaProblem, Individual};
