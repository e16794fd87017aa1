//! Piecewise Aggregate Approximation.

use std::fmt;
use std::str::FromStr;

use crate::error::SaxError;
use crate::series::TimeSeriesView;

/// How a series of length `n` is cut into `w` segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Segmentation {
    /// Segments may straddle sample boundaries; a sample split between two
    /// segments contributes to each in proportion to its overlap. Accepts any
    /// `1 <= w <= n`.
    #[default]
    Proportional,

    /// Every segment holds exactly `n / w` whole samples. Requires `n % w == 0`,
    /// which keeps segment boundaries identical for every series of length `n`.
    Exact,
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proportional => f.write_str("proportional"),
            Self::Exact => f.write_str("exact"),
        }
    }
}

impl FromStr for Segmentation {
    type Err = SaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proportional" => Ok(Self::Proportional),
            "exact" => Ok(Self::Exact),
            other => Err(SaxError::UnknownSegmentation {
                tag: other.to_string(),
            }),
        }
    }
}

/// Reduce a series to `word_length` segment means.
///
/// `word_length == len` returns the series unchanged and `word_length == 1`
/// returns its mean, under either policy.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SaxError::InvalidWordLength`] | `word_length == 0` or `word_length > series.len()` |
/// | [`SaxError::IndivisibleLength`] | [`Segmentation::Exact`] and `series.len() % word_length != 0` |
pub fn aggregate(
    series: TimeSeriesView<'_>,
    word_length: usize,
    segmentation: Segmentation,
) -> Result<Vec<f64>, SaxError> {
    let data = series.as_slice();
    let n = data.len();

    if word_length == n {
        return Ok(data.to_vec());
    }
    if word_length == 1 {
        return Ok(vec![series.mean()]);
    }
    if word_length == 0 || word_length > n {
        return Err(SaxError::InvalidWordLength { word_length, len: n });
    }

    match segmentation {
        Segmentation::Exact => exact_means(data, word_length),
        Segmentation::Proportional => Ok(proportional_means(data, word_length)),
    }
}

fn exact_means(data: &[f64], w: usize) -> Result<Vec<f64>, SaxError> {
    let n = data.len();
    if n % w != 0 {
        return Err(SaxError::IndivisibleLength {
            len: n,
            word_length: w,
        });
    }
    let size = n / w;
    Ok(data
        .chunks_exact(size)
        .map(|chunk| chunk.iter().sum::<f64>() / size as f64)
        .collect())
}

/// Fractional-overlap segment means in O(n + w).
///
/// Measured in units of `1/w` sample, sample `j` spans `[j*w, (j+1)*w)` and
/// segment `k` spans `[k*n, (k+1)*n)`. Each coefficient is the overlap-weighted
/// sum of samples divided by the segment width `n`.
fn proportional_means(data: &[f64], w: usize) -> Vec<f64> {
    let n = data.len();
    let mut coefficients = Vec::with_capacity(w);
    let mut j = 0;

    for k in 0..w {
        let seg_start = k * n;
        let seg_end = seg_start + n;
        let mut weighted = 0.0_f64;

        while j < n {
            let sample_start = j * w;
            let sample_end = sample_start + w;
            let overlap = sample_end.min(seg_end) - sample_start.max(seg_start);
            weighted += data[j] * overlap as f64;

            // Move on only once the sample is fully consumed.
            if sample_end <= seg_end {
                j += 1;
            }
            if sample_end >= seg_end {
                break;
            }
        }

        coefficients.push(weighted / n as f64);
    }

    coefficients
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::TimeSeries;

    fn ts(values: Vec<f64>) -> TimeSeries {
        TimeSeries::new(values).unwrap()
    }

    fn assert_close(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len(), "length: {got:?} vs {want:?}");
        for (i, (g, w)) in got.iter().zip(want).enumerate() {
            assert!((g - w).abs() < 1e-12, "[{i}] got {g}, want {w}");
        }
    }

    #[test]
    fn exact_segments_of_eight() {
        let s = ts(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let paa = aggregate(s.as_view(), 4, Segmentation::Exact).unwrap();
        assert_close(&paa, &[1.5, 3.5, 5.5, 7.5]);
    }

    #[test]
    fn word_length_equal_to_len_is_identity() {
        let values = vec![3.0, -1.0, 4.0, 1.5];
        let s = ts(values.clone());
        for seg in [Segmentation::Exact, Segmentation::Proportional] {
            assert_eq!(aggregate(s.as_view(), 4, seg).unwrap(), values);
        }
    }

    #[test]
    fn word_length_one_is_mean() {
        let s = ts(vec![1.0, 2.0, 3.0, 4.0, 10.0]);
        for seg in [Segmentation::Exact, Segmentation::Proportional] {
            assert_close(&aggregate(s.as_view(), 1, seg).unwrap(), &[4.0]);
        }
    }

    #[test]
    fn word_length_longer_than_series_fails() {
        let s = ts(vec![1.0, 2.0, 3.0]);
        let result = aggregate(s.as_view(), 5, Segmentation::Exact);
        assert!(matches!(
            result,
            Err(SaxError::InvalidWordLength { word_length: 5, len: 3 })
        ));
        assert!(aggregate(s.as_view(), 5, Segmentation::Proportional).is_err());
    }

    #[test]
    fn zero_word_length_fails() {
        let s = ts(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            aggregate(s.as_view(), 0, Segmentation::Proportional),
            Err(SaxError::InvalidWordLength { word_length: 0, .. })
        ));
    }

    #[test]
    fn exact_rejects_indivisible_length() {
        let s = ts(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(matches!(
            aggregate(s.as_view(), 2, Segmentation::Exact),
            Err(SaxError::IndivisibleLength { len: 5, word_length: 2 })
        ));
    }

    #[test]
    fn proportional_splits_middle_sample() {
        // Segments cover samples [1, 2, half of 3] and [half of 3, 4, 5].
        let s = ts(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let paa = aggregate(s.as_view(), 2, Segmentation::Proportional).unwrap();
        assert_close(&paa, &[1.8, 4.2]);
    }

    #[test]
    fn proportional_three_into_two() {
        // Segment width 1.5 samples: [a, a/2 + b/2 ...]
        let s = ts(vec![3.0, 6.0, 9.0]);
        let paa = aggregate(s.as_view(), 2, Segmentation::Proportional).unwrap();
        assert_close(&paa, &[4.0, 8.0]);
    }

    #[test]
    fn proportional_matches_exact_when_divisible() {
        let values: Vec<f64> = (0..24).map(|i| (i as f64 * 0.7).sin() * 3.0).collect();
        let s = ts(values);
        for w in [2, 3, 4, 6, 8, 12] {
            let exact = aggregate(s.as_view(), w, Segmentation::Exact).unwrap();
            let prop = aggregate(s.as_view(), w, Segmentation::Proportional).unwrap();
            assert_close(&prop, &exact);
        }
    }

    #[test]
    fn proportional_never_fails_and_preserves_mean() {
        let values: Vec<f64> = (0..37).map(|i| (i as f64).sqrt() - 3.0).collect();
        let s = ts(values);
        let mean = s.mean();
        for w in 1..=37 {
            let paa = aggregate(s.as_view(), w, Segmentation::Proportional).unwrap();
            assert_eq!(paa.len(), w);
            let paa_mean = paa.iter().sum::<f64>() / w as f64;
            assert!((paa_mean - mean).abs() < 1e-9, "w = {w}: {paa_mean} vs {mean}");
        }
    }

    #[test]
    fn segmentation_parse_and_display() {
        assert_eq!("exact".parse::<Segmentation>().unwrap(), Segmentation::Exact);
        assert_eq!(Segmentation::default().to_string(), "proportional");
        assert!(matches!(
            "fuzzy".parse::<Segmentation>(),
            Err(SaxError::UnknownSegmentation { .. })
        ));
    }
}
