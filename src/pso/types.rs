//! Particle state and the swarm problem trait.

use super::config::{PsoConfig, VelocityMode};
use crate::problem::SubsetSum;
use rand::Rng;

/// Defines a binary swarm problem.
///
/// Positions are bit strings of length [`dimension`](Self::dimension).
/// Fitness is maximized.
pub trait PsoProblem {
    /// Length of every position.
    fn dimension(&self) -> usize;

    /// Fitness of a position. Higher is better.
    fn evaluate(&self, position: &[bool]) -> i64;

    /// Called after each full sweep with the swarm's best fitness.
    fn on_iteration(&self, _iteration: usize, _best_fitness: i64) {}
}

impl PsoProblem for SubsetSum {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn evaluate(&self, position: &[bool]) -> i64 {
        self.closeness(position)
    }
}

/// One member of the swarm.
///
/// `position`, `velocity` and `personal_best` always have the problem's
/// dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current candidate.
    pub position: Vec<bool>,

    /// Per-bit drift; its rounded parity decides whether a bit flips.
    pub velocity: Vec<f64>,

    /// Best position this particle has visited.
    pub personal_best: Vec<bool>,

    /// Fitness of `personal_best`.
    pub personal_best_fitness: i64,

    /// Fitness of `position`.
    pub fitness: i64,
}

impl Particle {
    /// A particle with uniform random bits and per-bit velocities drawn from
    /// {0, 1}.
    ///
    /// Both fitness values start at 0 and are not evaluated, so the first
    /// positive fitness a particle reaches becomes its personal best.
    pub fn random<R: Rng>(dimension: usize, rng: &mut R) -> Self {
        let position: Vec<bool> = (0..dimension).map(|_| rng.random_bool(0.5)).collect();
        let velocity: Vec<f64> = (0..dimension)
            .map(|_| if rng.random_bool(0.5) { 1.0 } else { 0.0 })
            .collect();
        Self {
            personal_best: position.clone(),
            position,
            velocity,
            personal_best_fitness: 0,
            fitness: 0,
        }
    }

    /// Inertia + cognitive + social velocity update toward `global_best`.
    ///
    /// `r1` and `r2` are drawn fresh for every bit.
    pub fn update_velocity<R: Rng>(&mut self, global_best: &[bool], config: &PsoConfig, rng: &mut R) {
        for (i, v) in self.velocity.iter_mut().enumerate() {
            let x = bit(self.position[i]);
            let p = bit(self.personal_best[i]);
            let g = bit(global_best[i]);

            let r1: f64 = rng.random();
            let r2: f64 = rng.random();

            let next = config.inertia_weight * *v + config.c1 * r1 * (p - x) + config.c2 * r2 * (g - x);
            *v = match config.velocity_mode {
                VelocityMode::Rounded => round_half_up(next),
                VelocityMode::Continuous => next,
            };
        }
    }

    /// Moves each bit by its rounded velocity modulo 2.
    pub fn update_position(&mut self) {
        for (x, &v) in self.position.iter_mut().zip(&self.velocity) {
            let step = round_half_up(v) as i64;
            *x ^= step & 1 == 1;
        }
    }

    /// Stores the fitness of the current position and promotes it to the
    /// personal best on strict improvement.
    ///
    /// Returns `true` if the personal best changed.
    pub fn record_fitness(&mut self, fitness: i64) -> bool {
        self.fitness = fitness;
        if fitness > self.personal_best_fitness {
            self.personal_best.clone_from(&self.position);
            self.personal_best_fitness = fitness;
            true
        } else {
            false
        }
    }
}

#[inline]
fn bit(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Rounds to the nearest integer with halves going toward positive infinity.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn particle(position: Vec<bool>, velocity: Vec<f64>) -> Particle {
        Particle {
            personal_best: position.clone(),
            position,
            velocity,
            personal_best_fitness: 0,
            fitness: 0,
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(1.49), 1.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.51), -2.0);
    }

    #[test]
    fn test_random_particle_shape() {
        let mut rng = create_rng(4);
        let p = Particle::random(16, &mut rng);
        assert_eq!(p.position.len(), 16);
        assert_eq!(p.velocity.len(), 16);
        assert_eq!(p.personal_best, p.position);
        assert_eq!(p.fitness, 0);
        assert_eq!(p.personal_best_fitness, 0);
        assert!(p.velocity.iter().all(|&v| v == 0.0 || v == 1.0));
    }

    #[test]
    fn test_position_update_uses_parity() {
        let mut p = particle(
            vec![false, false, true, true, false, true],
            vec![0.0, 1.0, 2.0, -1.0, 3.4, -2.6],
        );
        p.update_position();
        // steps: 0, 1, 2, -1, 3, -3
        assert_eq!(p.position, vec![false, true, true, false, true, false]);
    }

    #[test]
    fn test_velocity_pure_inertia_when_aligned() {
        // position == personal best == global best: only inertia remains
        let mut p = particle(vec![true, false, true], vec![1.0, 3.0, -4.0]);
        let gbest = p.position.clone();
        let mut rng = create_rng(1);

        let config = PsoConfig::default().with_velocity_mode(VelocityMode::Continuous);
        p.update_velocity(&gbest, &config, &mut rng);
        assert_eq!(p.velocity, vec![0.5, 1.5, -2.0]);

        let config = PsoConfig::default();
        let mut q = particle(vec![true, false, true], vec![1.0, 3.0, -4.0]);
        q.update_velocity(&gbest, &config, &mut rng);
        // 0.5 -> 1, 1.5 -> 2, -2.0 -> -2
        assert_eq!(q.velocity, vec![1.0, 2.0, -2.0]);
    }

    #[test]
    fn test_velocity_cognitive_and_social_terms() {
        // bit 0: pulled toward pbest only, bit 1: pushed off by gbest only,
        // bit 2: pulled toward gbest only
        let mut p = particle(vec![false, true, false], vec![1.0, 0.0, -1.0]);
        p.personal_best = vec![true, true, false];
        let gbest = vec![false, false, true];
        let config = PsoConfig::default()
            .with_inertia_weight(0.5)
            .with_coefficients(2.0, 3.0)
            .with_velocity_mode(VelocityMode::Continuous);

        let mut rng = create_rng(99);
        let mut replay = rng.clone();
        let draws: Vec<(f64, f64)> = (0..3)
            .map(|_| (replay.random::<f64>(), replay.random::<f64>()))
            .collect();

        p.update_velocity(&gbest, &config, &mut rng);

        assert_eq!(p.velocity[0], 0.5 + 2.0 * draws[0].0);
        assert_eq!(p.velocity[1], -3.0 * draws[1].1);
        assert_eq!(p.velocity[2], -0.5 + 3.0 * draws[2].1);
        assert!(p.velocity[0] > 0.5);
        assert!(p.velocity[1] < 0.0);
    }

    #[test]
    fn test_rounded_velocities_are_integral() {
        let mut rng = create_rng(21);
        let config = PsoConfig::default();
        let mut p = Particle::random(32, &mut rng);
        let gbest: Vec<bool> = p.position.iter().map(|b| !b).collect();
        for _ in 0..10 {
            p.update_velocity(&gbest, &config, &mut rng);
            p.update_position();
            assert!(p.velocity.iter().all(|v| v.fract() == 0.0));
        }
    }

    #[test]
    fn test_personal_best_only_on_strict_improvement() {
        let mut p = particle(vec![true, false], vec![0.0, 0.0]);

        assert!(!p.record_fitness(0));
        assert!(!p.record_fitness(-5));
        assert_eq!(p.fitness, -5);
        assert_eq!(p.personal_best_fitness, 0);

        assert!(p.record_fitness(3));
        assert_eq!(p.personal_best_fitness, 3);

        p.position = vec![false, true];
        assert!(!p.record_fitness(3));
        assert_eq!(p.personal_best, vec![true, false]);

        assert!(p.record_fitness(4));
        assert_eq!(p.personal_best, vec![false, true]);
    }
}
