//! Min-max scaling into the unit interval.

use crate::error::MetricsError;

/// Rescale `values` linearly so the minimum maps to 0 and the maximum to 1.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MetricsError::EmptyInput`] | `values` is empty |
/// | [`MetricsError::ConstantSeries`] | `max == min` |
pub fn min_max_scale(values: &[f64]) -> Result<Vec<f64>, MetricsError> {
    let (min, max) = values
        .iter()
        .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .ok_or(MetricsError::EmptyInput)?;

    let range = max - min;
    if range == 0.0 {
        return Err(MetricsError::ConstantSeries { value: min });
    }
    Ok(values.iter().map(|&v| (v - min) / range).collect())
}
