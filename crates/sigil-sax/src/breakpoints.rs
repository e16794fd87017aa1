//! Equiprobable N(0, 1) breakpoints.

use std::f64::consts::SQRT_2;

use statrs::function::erf::erf_inv;

use crate::error::SaxError;

/// Standard normal quantile `Φ⁻¹(p) = √2 · erf⁻¹(2p − 1)`.
fn normal_quantile(p: f64) -> f64 {
    SQRT_2 * erf_inv(2.0 * p - 1.0)
}

/// Compute the `cardinality - 1` cut points that split N(0, 1) into
/// `cardinality` bins of equal probability mass.
///
/// The result is the `(1/c, 2/c, …, (c−1)/c)` quantiles, strictly increasing.
/// Only the lower half is evaluated; the upper half is its mirror image, so
/// `b[i] == -b[c - 2 - i]` holds exactly and the median cut (even `c`) is `0.0`.
/// Nothing is cached.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SaxError::InvalidCardinality`] | `cardinality < 2` |
pub fn breakpoints(cardinality: usize) -> Result<Vec<f64>, SaxError> {
    if cardinality < 2 {
        return Err(SaxError::InvalidCardinality { cardinality });
    }

    let n_cuts = cardinality - 1;
    let c = cardinality as f64;
    let mut cuts = vec![0.0_f64; n_cuts];
    for i in 0..n_cuts / 2 {
        let q = normal_quantile((i + 1) as f64 / c);
        cuts[i] = q;
        cuts[n_cuts - 1 - i] = -q;
    }
    Ok(cuts)
}

/// Ordinal of the interval containing `value`.
///
/// Counts the breakpoints strictly below `value`, so a value equal to a
/// breakpoint lands in the lower interval.
pub(crate) fn interval_of(value: f64, cuts: &[f64]) -> usize {
    cuts.partition_point(|&b| b < value)
}
