//! Swarm configuration and velocity discretization.

use crate::error::{Result, SolverError};

/// How velocities are stored between iterations.
///
/// Position updates always use the velocity rounded to an integer (halves
/// round up) and keep only its parity: an odd step flips the bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VelocityMode {
    /// Each new velocity is rounded before it is stored, so the inertia term
    /// of the next iteration sees an integer flip count.
    #[default]
    Rounded,

    /// Velocities keep their real value; rounding happens only when the
    /// position is updated.
    Continuous,
}

/// Configuration for the binary particle swarm.
///
/// # Examples
///
/// ```
/// use u_subsetsum::pso::{PsoConfig, VelocityMode};
///
/// let config = PsoConfig::default()
///     .with_swarm_size(40)
///     .with_max_iterations(250)
///     .with_inertia_weight(0.7)
///     .with_coefficients(1.5, 1.5)
///     .with_velocity_mode(VelocityMode::Continuous)
///     .with_seed(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of particles.
    pub swarm_size: usize,

    /// Number of full sweeps over the swarm. There is no early exit.
    pub max_iterations: usize,

    /// Weight of the previous velocity.
    pub inertia_weight: f64,

    /// Cognitive coefficient: pull toward the particle's own best.
    pub c1: f64,

    /// Social coefficient: pull toward the swarm's best.
    pub c2: f64,

    /// Velocity storage between iterations.
    pub velocity_mode: VelocityMode,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            swarm_size: 20,
            max_iterations: 100,
            inertia_weight: 0.5,
            c1: 2.0,
            c2: 2.0,
            velocity_mode: VelocityMode::default(),
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the number of particles.
    pub fn with_swarm_size(mut self, n: usize) -> Self {
        self.swarm_size = n;
        self
    }

    /// Sets the number of sweeps.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the inertia weight `w`.
    pub fn with_inertia_weight(mut self, w: f64) -> Self {
        self.inertia_weight = w;
        self
    }

    /// Sets the cognitive (`c1`) and social (`c2`) coefficients.
    pub fn with_coefficients(mut self, c1: f64, c2: f64) -> Self {
        self.c1 = c1;
        self.c2 = c2;
        self
    }

    /// Sets how velocities are stored between sweeps.
    pub fn with_velocity_mode(mut self, mode: VelocityMode) -> Self {
        self.velocity_mode = mode;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidConfiguration`] describing the first
    /// invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.swarm_size == 0 {
            return Err(SolverError::config("swarm_size must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::config("max_iterations must be at least 1"));
        }
        for (name, value) in [
            ("inertia_weight", self.inertia_weight),
            ("c1", self.c1),
            ("c2", self.c2),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SolverError::config(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
