//! Synthetic series for demos, tests, and benchmarks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use crate::error::SaxError;
use crate::series::TimeSeries;

/// Gaussian random walk of length `len`: the cumulative sum of `len`
/// independent N(0, 1) steps drawn from a `ChaCha8Rng` seeded with `seed`.
///
/// The same `(len, seed)` pair always yields the same series.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SaxError::InvalidLength`] | `len == 0` |
pub fn random_walk(len: usize, seed: u64) -> Result<TimeSeries, SaxError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_walk_with(&mut rng, len)
}

/// Like [`random_walk`], drawing steps from a caller-provided generator.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SaxError::InvalidLength`] | `len == 0` |
pub fn random_walk_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Result<TimeSeries, SaxError> {
    if len == 0 {
        return Err(SaxError::InvalidLength { len });
    }
    let mut level = 0.0_f64;
    let values = (0..len)
        .map(|_| {
            let step: f64 = rng.sample(StandardNormal);
            level += step;
            level
        })
        .collect();
    TimeSeries::new(values)
}
