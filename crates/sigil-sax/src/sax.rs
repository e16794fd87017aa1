//! Symbolic Aggregate approXimation: PAA coefficients to symbol words.

use std::fmt;

use tracing::{debug, instrument};

use crate::alphabet::Representation;
use crate::breakpoints::{breakpoints, interval_of};
use crate::error::SaxError;
use crate::paa::{Segmentation, aggregate};
use crate::series::TimeSeriesView;

/// A SAX word: one ordinal symbol per PAA segment.
///
/// Stores ordinals rather than rendered labels; `representation` is the
/// rendering actually used, after the letter-to-binary fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SaxWord {
    ordinals: Vec<usize>,
    cardinality: usize,
    representation: Representation,
}

impl SaxWord {
    /// Map PAA coefficients onto intervals of `cuts`.
    pub(crate) fn encode(
        coefficients: &[f64],
        cuts: &[f64],
        representation: Representation,
    ) -> Self {
        let cardinality = cuts.len() + 1;
        Self {
            ordinals: coefficients.iter().map(|&v| interval_of(v, cuts)).collect(),
            cardinality,
            representation: representation.effective(cardinality),
        }
    }

    /// Parse rendered symbol labels back into a word.
    ///
    /// The letter-to-binary fallback is applied to `representation` first, so
    /// labels printed from a discretized word always parse back.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SaxError::InvalidCardinality`] | `cardinality < 2` |
    /// | [`SaxError::UnknownSymbol`] | A label is not in the alphabet |
    pub fn from_symbols<S: AsRef<str>>(
        labels: &[S],
        cardinality: usize,
        representation: Representation,
    ) -> Result<Self, SaxError> {
        let representation = representation.effective(cardinality);
        let alphabet = crate::alphabet::symbols(cardinality, representation)?;
        let ordinals = labels
            .iter()
            .map(|label| ordinal_of(label.as_ref(), &alphabet))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            ordinals,
            cardinality,
            representation,
        })
    }

    /// Return the number of symbols (the word length `w`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordinals.len()
    }

    /// Return true if the word holds no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }

    /// Return the ordinal symbol indices, each in `0..cardinality`.
    #[must_use]
    pub fn ordinals(&self) -> &[usize] {
        &self.ordinals
    }

    /// Return the alphabet size.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// Return the rendering used for this word's labels.
    #[must_use]
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Render each symbol as its alphabet label.
    #[must_use]
    pub fn symbols(&self) -> Vec<String> {
        self.ordinals
            .iter()
            .map(|&i| self.representation.label(i, self.cardinality))
            .collect()
    }

    /// Count how often each alphabet symbol occurs, in ordinal order.
    ///
    /// The returned vector always has `cardinality` entries.
    #[must_use]
    pub fn symbol_frequency(&self) -> Vec<usize> {
        let mut counts = vec![0_usize; self.cardinality];
        for &i in &self.ordinals {
            counts[i] += 1;
        }
        counts
    }
}

impl fmt::Display for SaxWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Integer labels vary in width, so they need a separator to stay readable.
        let sep = match self.representation {
            Representation::Integer => " ",
            Representation::Binary | Representation::Letter => "",
        };
        f.write_str(&self.symbols().join(sep))
    }
}

pub(crate) fn ordinal_of(label: &str, alphabet: &[String]) -> Result<usize, SaxError> {
    alphabet
        .iter()
        .position(|s| s == label)
        .ok_or_else(|| SaxError::UnknownSymbol {
            symbol: label.to_string(),
        })
}

/// Discretize a series into a SAX word using proportional segmentation.
///
/// The series is used as given; z-normalize it first (see
/// [`z_normalize`](crate::z_normalize)) so the N(0, 1) breakpoints are meaningful.
/// [`Representation::Letter`] with more than 26 symbols silently renders as
/// [`Representation::Binary`]. Use [`SaxConfig`](crate::SaxConfig) to choose
/// exact segmentation.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SaxError::InvalidCardinality`] | `cardinality < 2` |
/// | [`SaxError::InvalidWordLength`] | `word_length == 0` or `word_length > series.len()` |
#[instrument(skip(series), fields(n = series.len()))]
pub fn discretize(
    series: TimeSeriesView<'_>,
    word_length: usize,
    cardinality: usize,
    representation: Representation,
) -> Result<SaxWord, SaxError> {
    discretize_with(
        series,
        word_length,
        cardinality,
        representation,
        Segmentation::default(),
    )
}

pub(crate) fn discretize_with(
    series: TimeSeriesView<'_>,
    word_length: usize,
    cardinality: usize,
    representation: Representation,
    segmentation: Segmentation,
) -> Result<SaxWord, SaxError> {
    aggregate_and_encode(series, word_length, cardinality, representation, segmentation)
        .map(|(_, word)| word)
}

/// PAA followed by symbol assignment, returning the coefficients alongside the word.
pub(crate) fn aggregate_and_encode(
    series: TimeSeriesView<'_>,
    word_length: usize,
    cardinality: usize,
    representation: Representation,
    segmentation: Segmentation,
) -> Result<(Vec<f64>, SaxWord), SaxError> {
    let cuts = breakpoints(cardinality)?;
    let coefficients = aggregate(series, word_length, segmentation)?;
    let word = SaxWord::encode(&coefficients, &cuts, representation);
    if word.representation() != representation {
        debug!(
            cardinality,
            requested = %representation,
            used = %word.representation(),
            "alphabet too small for representation, falling back"
        );
    }
    Ok((coefficients, word))
}
