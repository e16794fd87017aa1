//! Distance newtype and the reference Euclidean distance.

use std::cmp::Ordering;
use std::fmt;

use crate::error::SaxError;

/// A non-negative distance between two series or two SAX words.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SaxDistance(f64);

impl SaxDistance {
    /// Zero distance.
    pub const ZERO: Self = Self(0.0);

    pub(crate) fn new(value: f64) -> Self {
        debug_assert!(value >= 0.0, "distance must be non-negative, got {value}");
        Self(value)
    }

    /// Return the raw distance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for SaxDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

/// Euclidean distance `sqrt(sum((a_i - b_i)^2))` between two equal-length series.
///
/// This is the distance MINDIST lower-bounds when both series are z-normalized.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SaxError::LengthMismatch`] | `a.len() != b.len()` |
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<SaxDistance, SaxError> {
    if a.len() != b.len() {
        return Err(SaxError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let sum_sq = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>();
    Ok(SaxDistance::new(sum_sq.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let d = SaxDistance::new(1.234567);
        assert_eq!(format!("{d}"), "1.234567");
    }

    #[test]
    fn total_cmp_ordering() {
        let a = SaxDistance::new(1.0);
        let b = SaxDistance::new(2.0);
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(b.total_cmp(&a), Ordering::Greater);
        assert_eq!(SaxDistance::ZERO.total_cmp(&SaxDistance::ZERO), Ordering::Equal);
    }

    #[test]
    fn euclidean_three_four_five() {
        let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
        assert!((d.value() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn euclidean_self_is_zero() {
        let s = [1.5, -2.0, 7.25];
        assert_eq!(euclidean_distance(&s, &s).unwrap(), SaxDistance::ZERO);
    }

    #[test]
    fn euclidean_length_mismatch() {
        assert!(matches!(
            euclidean_distance(&[1.0, 2.0], &[1.0]),
            Err(SaxError::LengthMismatch { left: 2, right: 1 })
        ));
    }
}
