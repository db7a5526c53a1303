//! Bit-string genetic operators.
//!
//! These operate on `&[bool]` encodings and know nothing about what the bits
//! select.
//!
//! - [`random_bits`]: uniform initialization
//! - [`one_point_crossover`]: swap suffixes at a single cut point
//! - [`bit_flip_mutation`]: independent per-bit flips
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use rand::Rng;

/// A bit string of length `n`, each bit uniform in {0, 1}.
pub fn random_bits<R: Rng>(n: usize, rng: &mut R) -> Vec<bool> {
    (0..n).map(|_| rng.random_bool(0.5)).collect()
}

/// One-point crossover at a uniformly drawn point in `[0, n)`.
///
/// Returns the two children and the cut point used.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn one_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>, usize) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let point = rng.random_range(0..n);
    let (child1, child2) = crossover_at(parent1, parent2, point);
    (child1, child2, point)
}

/// Children of a cut at `point`: `p1[..point] + p2[point..]` and
/// `p2[..point] + p1[point..]`.
pub fn crossover_at(parent1: &[bool], parent2: &[bool], point: usize) -> (Vec<bool>, Vec<bool>) {
    let mut child1 = Vec::with_capacity(parent1.len());
    child1.extend_from_slice(&parent1[..point]);
    child1.extend_from_slice(&parent2[point..]);

    let mut child2 = Vec::with_capacity(parent2.len());
    child2.extend_from_slice(&parent2[..point]);
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}

/// Flips each bit independently with probability `rate`.
///
/// Returns the number of bits flipped.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn bit_flip_mutation<R: Rng>(bits: &mut [bool], rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for bit in bits.iter_mut() {
        if rng.random_bool(rate) {
            *bit = !*bit;
            flipped += 1;
        }
    }
    flipped
}
