//! Immutable SAX configuration and the full normalize → PAA → SAX pipeline.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::alphabet::{Representation, symbols};
use crate::breakpoints::breakpoints;
use crate::distance::SaxDistance;
use crate::error::SaxError;
use crate::matrix::DistanceMatrix;
use crate::paa::{Segmentation, aggregate};
use crate::preprocess::z_normalize;
use crate::sax::{SaxWord, aggregate_and_encode, discretize_with};
use crate::series::{TimeSeries, TimeSeriesView};

/// Parameters of a SAX transform. Copyable and shareable across threads.
///
/// Construct via [`SaxConfig::new`], then chain `with_*` methods to override defaults.
///
/// # Defaults
///
/// | Parameter        | Default                       |
/// |------------------|-------------------------------|
/// | `representation` | `Representation::Letter`      |
/// | `segmentation`   | `Segmentation::Proportional`  |
/// | `normalize`      | `true`                        |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaxConfig {
    word_length: usize,
    cardinality: usize,
    representation: Representation,
    segmentation: Segmentation,
    normalize: bool,
}

impl SaxConfig {
    /// Create a configuration producing words of `word_length` symbols over `cardinality` symbols.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SaxError::ZeroWordLength`] | `word_length == 0` |
    /// | [`SaxError::InvalidCardinality`] | `cardinality < 2` |
    pub fn new(word_length: usize, cardinality: usize) -> Result<Self, SaxError> {
        if word_length == 0 {
            return Err(SaxError::ZeroWordLength);
        }
        if cardinality < 2 {
            return Err(SaxError::InvalidCardinality { cardinality });
        }
        Ok(Self {
            word_length,
            cardinality,
            representation: Representation::default(),
            segmentation: Segmentation::default(),
            normalize: true,
        })
    }

    /// Set how symbols are rendered.
    #[must_use]
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Set the PAA segmentation policy. Index builders should use
    /// [`Segmentation::Exact`] so every series shares the same boundaries.
    #[must_use]
    pub fn with_segmentation(mut self, segmentation: Segmentation) -> Self {
        self.segmentation = segmentation;
        self
    }

    /// Enable or disable z-normalization in [`transform`](Self::transform).
    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Return the word length.
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Return the alphabet size.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// Return the requested representation.
    #[must_use]
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Return the representation words are actually rendered with.
    #[must_use]
    pub fn effective_representation(&self) -> Representation {
        self.representation.effective(self.cardinality)
    }

    /// Return the segmentation policy.
    #[must_use]
    pub fn segmentation(&self) -> Segmentation {
        self.segmentation
    }

    /// Return whether [`transform`](Self::transform) z-normalizes its input.
    #[must_use]
    pub fn normalize(&self) -> bool {
        self.normalize
    }

    /// Smallest series length `>= len` this configuration can aggregate.
    ///
    /// Under [`Segmentation::Exact`] this rounds up to the next multiple of the
    /// word length; otherwise it only enforces `len >= word_length`.
    #[must_use]
    pub fn aligned_length(&self, len: usize) -> usize {
        let len = len.max(self.word_length);
        match self.segmentation {
            Segmentation::Exact => len.div_ceil(self.word_length) * self.word_length,
            Segmentation::Proportional => len,
        }
    }

    /// Return the N(0, 1) breakpoints for this cardinality.
    pub fn breakpoints(&self) -> Result<Vec<f64>, SaxError> {
        breakpoints(self.cardinality)
    }

    /// Return the alphabet in ascending ordinal order, after the letter fallback.
    pub fn alphabet(&self) -> Result<Vec<String>, SaxError> {
        symbols(self.cardinality, self.effective_representation())
    }

    /// PAA of `series` under this configuration's word length and segmentation.
    pub fn aggregate(&self, series: TimeSeriesView<'_>) -> Result<Vec<f64>, SaxError> {
        aggregate(series, self.word_length, self.segmentation)
    }

    /// Discretize `series` as given, without normalizing.
    pub fn discretize(&self, series: TimeSeriesView<'_>) -> Result<SaxWord, SaxError> {
        discretize_with(
            series,
            self.word_length,
            self.cardinality,
            self.representation,
            self.segmentation,
        )
    }

    /// Run the full pipeline: optional z-normalization, PAA, then SAX.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SaxError::ConstantSeries`] | Normalization is enabled and the series is constant |
    /// | [`SaxError::InvalidWordLength`] | `word_length > series.len()` |
    /// | [`SaxError::IndivisibleLength`] | Exact segmentation and `series.len() % word_length != 0` |
    #[instrument(skip(self, series), fields(n = series.len(), w = self.word_length, c = self.cardinality))]
    pub fn transform(&self, series: TimeSeriesView<'_>) -> Result<SaxTransform, SaxError> {
        let series = if self.normalize {
            z_normalize(series)?
        } else {
            TimeSeries::new(series.as_slice().to_vec())?
        };
        let (coefficients, word) = aggregate_and_encode(
            series.as_view(),
            self.word_length,
            self.cardinality,
            self.representation,
            self.segmentation,
        )?;
        debug!(word = %word, "series discretized");
        Ok(SaxTransform {
            series,
            coefficients,
            word,
        })
    }

    /// Transform many series in parallel. Output order matches input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`SaxError`] encountered.
    #[instrument(skip(self, series), fields(n = series.len()))]
    pub fn transform_batch(&self, series: &[TimeSeries]) -> Result<Vec<SaxTransform>, SaxError> {
        series.par_iter().map(|s| self.transform(s.as_view())).collect()
    }

    /// Check that `word` has this configuration's length and alphabet size.
    fn check_word(&self, word: &SaxWord) -> Result<(), SaxError> {
        if word.len() != self.word_length {
            return Err(SaxError::LengthMismatch {
                left: self.word_length,
                right: word.len(),
            });
        }
        if word.cardinality() != self.cardinality {
            return Err(SaxError::CardinalityMismatch {
                left: self.cardinality,
                right: word.cardinality(),
            });
        }
        Ok(())
    }

    /// MINDIST between two words of this configuration, built from
    /// length-`original_length` series.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SaxError::LengthMismatch`] | A word does not have `word_length` symbols |
    /// | [`SaxError::CardinalityMismatch`] | A word uses a different alphabet size |
    /// | [`SaxError::InvalidWordLength`] | `word_length > original_length` |
    pub fn mindist(
        &self,
        a: &SaxWord,
        b: &SaxWord,
        original_length: usize,
    ) -> Result<SaxDistance, SaxError> {
        self.check_word(a)?;
        self.check_word(b)?;
        a.mindist(b, original_length)
    }

    /// Pairwise MINDIST for a collection of words, computed in parallel.
    ///
    /// # Errors
    ///
    /// Returns the first [`SaxError`] from [`SaxConfig::mindist`], e.g. when a
    /// word does not match this configuration.
    #[instrument(skip(self, words), fields(n = words.len()))]
    pub fn pairwise(
        &self,
        words: &[SaxWord],
        original_length: usize,
    ) -> Result<DistanceMatrix, SaxError> {
        words.iter().try_for_each(|w| self.check_word(w))?;
        let n = words.len();
        let total_pairs = n * n.saturating_sub(1) / 2;

        let distances = (0..total_pairs)
            .into_par_iter()
            .map(|flat_idx| {
                let (i, j) = DistanceMatrix::unflatten(flat_idx);
                words[i].mindist(&words[j], original_length)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DistanceMatrix::from_raw(n, distances))
    }
}

/// Output of [`SaxConfig::transform`].
#[derive(Debug, Clone, PartialEq)]
pub struct SaxTransform {
    /// The series that was aggregated (z-normalized when enabled).
    pub series: TimeSeries,
    /// PAA coefficients, one per segment.
    pub coefficients: Vec<f64>,
    /// The SAX word.
    pub word: SaxWord,
}
