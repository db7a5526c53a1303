//! Binary Particle Swarm Optimization for subset sum.
//!
//! Continuous PSO velocity equations applied directly to bits. A particle's
//! velocity is a per-bit real number; the position update adds the rounded
//! velocity to the bit and keeps the result modulo 2, so an odd step flips
//! the bit and an even step leaves it.
//!
//! Per sweep, for every particle in order:
//!
//! 1. `v = w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)`
//! 2. `x = (x + round(v)) mod 2`
//! 3. evaluate, and replace the personal best on strict improvement
//!
//! The global best is recomputed after each sweep. There is no early exit.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod runner;
mod types;

pub use config::{PsoConfig, VelocityMode};
pub use runner::{PsoResult, PsoRunner};
pub use types::{Particle, PsoProblem};
