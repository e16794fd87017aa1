//! Lower-bounding distances between SAX symbols and words (MINDIST).

use crate::alphabet::{Representation, symbols};
use crate::breakpoints::breakpoints;
use crate::distance::SaxDistance;
use crate::error::SaxError;
use crate::sax::{SaxWord, ordinal_of};

/// Gap between the intervals of ordinals `i` and `j`; zero when they touch.
pub(crate) fn ordinal_distance(i: usize, j: usize, cuts: &[f64]) -> f64 {
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    if hi - lo <= 1 {
        0.0
    } else {
        cuts[hi - 1] - cuts[lo]
    }
}

/// `sqrt(n / w) * sqrt(sum(d_i^2))` over paired ordinals.
fn scaled_bound(
    original_length: usize,
    a: &[usize],
    b: &[usize],
    cuts: &[f64],
) -> Result<SaxDistance, SaxError> {
    let w = a.len();
    if w == 0 || w > original_length {
        return Err(SaxError::InvalidWordLength {
            word_length: w,
            len: original_length,
        });
    }
    let sum_sq = a
        .iter()
        .zip(b)
        .map(|(&i, &j)| ordinal_distance(i, j, cuts).powi(2))
        .sum::<f64>();
    let scale = (original_length as f64 / w as f64).sqrt();
    Ok(SaxDistance::new(scale * sum_sq.sqrt()))
}

/// Distance between two individual SAX symbols.
///
/// Symbols whose ordinals differ by at most one are at distance zero.
/// Otherwise the result is the width of the gap separating their intervals,
/// `breakpoints[max - 1] - breakpoints[min]`.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SaxError::LengthMismatch`] | `breakpoints.len() + 1 != alphabet.len()` |
/// | [`SaxError::UnknownSymbol`] | `a` or `b` is not in `alphabet` |
pub fn symbol_distance<S: AsRef<str>>(
    a: &str,
    b: &str,
    alphabet: &[S],
    breakpoints: &[f64],
) -> Result<f64, SaxError> {
    if breakpoints.len() + 1 != alphabet.len() {
        return Err(SaxError::LengthMismatch {
            left: alphabet.len(),
            right: breakpoints.len() + 1,
        });
    }
    let labels: Vec<String> = alphabet.iter().map(|s| s.as_ref().to_string()).collect();
    let i = ordinal_of(a, &labels)?;
    let j = ordinal_of(b, &labels)?;
    Ok(ordinal_distance(i, j, breakpoints))
}

/// MINDIST between two rendered SAX words of a length-`original_length` series.
///
/// Computes `sqrt(n / w) * sqrt(sum(symbol_distance(a_i, b_i)^2))`. The result
/// never exceeds the Euclidean distance between the two z-normalized series the
/// words were built from. [`Representation::Letter`] above 26 symbols is read
/// as [`Representation::Binary`], matching [`discretize`](crate::discretize).
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SaxError::LengthMismatch`] | `word_a.len() != word_b.len()` |
/// | [`SaxError::InvalidCardinality`] | `cardinality < 2` |
/// | [`SaxError::InvalidWordLength`] | Words are empty or longer than `original_length` |
/// | [`SaxError::UnknownSymbol`] | A label is not in the alphabet |
pub fn word_distance<S: AsRef<str>>(
    original_length: usize,
    word_a: &[S],
    word_b: &[S],
    cardinality: usize,
    representation: Representation,
) -> Result<SaxDistance, SaxError> {
    if word_a.len() != word_b.len() {
        return Err(SaxError::LengthMismatch {
            left: word_a.len(),
            right: word_b.len(),
        });
    }
    let alphabet = symbols(cardinality, representation.effective(cardinality))?;
    let cuts = breakpoints(cardinality)?;
    let parse = |word: &[S]| {
        word.iter()
            .map(|s| ordinal_of(s.as_ref(), &alphabet))
            .collect::<Result<Vec<_>, _>>()
    };
    let a = parse(word_a)?;
    let b = parse(word_b)?;
    scaled_bound(original_length, &a, &b, &cuts)
}

impl SaxWord {
    /// MINDIST between this word and `other`, both built from length-`original_length` series.
    ///
    /// Works directly on ordinals, so the rendering of either word is irrelevant.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SaxError::LengthMismatch`] | The words have different lengths |
    /// | [`SaxError::CardinalityMismatch`] | The words use different alphabet sizes |
    /// | [`SaxError::InvalidWordLength`] | Words are empty or longer than `original_length` |
    pub fn mindist(&self, other: &SaxWord, original_length: usize) -> Result<SaxDistance, SaxError> {
        if self.len() != other.len() {
            return Err(SaxError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        if self.cardinality() != other.cardinality() {
            return Err(SaxError::CardinalityMismatch {
                left: self.cardinality(),
                right: other.cardinality(),
            });
        }
        let cuts = breakpoints(self.cardinality())?;
        scaled_bound(original_length, self.ordinals(), other.ordinals(), &cuts)
    }
}
