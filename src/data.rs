//! Seeded random dataset generation.

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates `count` values drawn i.i.d. from the uniform distribution
/// over `[low, high)`, using a deterministic seeded generator.
///
/// Same `(count, seed, low, high)` always yields the same vector, so every
/// strategy in one sweep iteration sees identical input.
pub fn generate_data(count: usize, seed: u64, low: f64, high: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(low, high);
    (0..count).map(|_| rng.sample(dist)).collect()
}
