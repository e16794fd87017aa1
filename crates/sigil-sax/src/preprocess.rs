//! Series preprocessing: z-normalization ahead of discretization.

use rayon::prelude::*;

use crate::error::SaxError;
use crate::series::{TimeSeries, TimeSeriesView};

/// Z-normalize a time series to zero mean and unit variance.
///
/// Uses population standard deviation (divides by n, not n-1). SAX breakpoints
/// assume N(0, 1) input, so series should pass through here before discretizing.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SaxError::ConstantSeries`] | All values are identical (zero variance) |
pub fn z_normalize(series: TimeSeriesView<'_>) -> Result<TimeSeries, SaxError> {
    let data = series.as_slice();
    // Rounding in the mean leaves a tiny nonzero std for values like 0.1.
    if data.iter().all(|&x| x == data[0]) {
        return Err(SaxError::ConstantSeries {
            n: data.len(),
            value: data[0],
        });
    }

    let n = data.len() as f64;
    let mean = series.mean();
    let variance = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    TimeSeries::new(data.iter().map(|&x| (x - mean) / std).collect())
}

/// Z-normalize a batch of time series in parallel.
///
/// # Errors
///
/// Returns the first [`SaxError`] encountered.
pub fn z_normalize_batch(series: &[TimeSeries]) -> Result<Vec<TimeSeries>, SaxError> {
    series.par_iter().map(|s| z_normalize(s.as_view())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_series(values: Vec<f64>) -> TimeSeries {
        TimeSeries::new(values).unwrap()
    }

    #[test]
    fn z_normalize_zero_mean_unit_variance() {
        let ts = make_series(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let normalized = z_normalize(ts.as_view()).unwrap();
        let data = normalized.as_ref();
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let variance = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.abs() < 1e-10, "mean was {mean}");
        assert!((variance - 1.0).abs() < 1e-10, "variance was {variance}");
    }

    #[test]
    fn z_normalize_constant_series_error() {
        let ts = make_series(vec![5.0, 5.0, 5.0]);
        let result = z_normalize(ts.as_view());
        assert!(
            matches!(result, Err(SaxError::ConstantSeries { n: 3, value: 5.0 })),
            "expected ConstantSeries error, got {result:?}"
        );
    }

    #[test]
    fn z_normalize_inexact_constant_is_rejected() {
        for n in [3, 10] {
            let ts = make_series(vec![0.1; n]);
            let result = z_normalize(ts.as_view());
            assert!(
                matches!(result, Err(SaxError::ConstantSeries { n: got, value }) if got == n && value == 0.1),
                "expected ConstantSeries for [0.1; {n}], got {result:?}"
            );
        }
    }

    #[test]
    fn z_normalize_single_sample_is_constant() {
        let ts = make_series(vec![2.5]);
        assert!(matches!(
            z_normalize(ts.as_view()),
            Err(SaxError::ConstantSeries { n: 1, .. })
        ));
    }

    #[test]
    fn z_normalize_batch_one_constant_fails() {
        let batch = vec![
            make_series(vec![1.0, 2.0, 3.0]),
            make_series(vec![7.0, 7.0, 7.0]),
        ];
        let result = z_normalize_batch(&batch);
        assert!(matches!(result, Err(SaxError::ConstantSeries { .. })));
    }

    #[test]
    fn z_normalize_batch_preserves_order() {
        let batch = vec![make_series(vec![1.0, 2.0, 3.0]), make_series(vec![3.0, 2.0, 1.0])];
        let result = z_normalize_batch(&batch).unwrap();
        assert!(result[0].as_ref()[0] < 0.0);
        assert!(result[1].as_ref()[0] > 0.0);
    }
}
