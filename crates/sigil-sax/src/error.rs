//! Error types for series validation, aggregation, and discretization.

/// Coarse classification of a [`SaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter or input value is outside its valid domain.
    InvalidParameter,
    /// Two inputs that must have the same length do not.
    LengthMismatch,
}

/// Errors from series validation, PAA, SAX discretization, and word distances.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaxError {
    /// Returned when an empty slice is provided as a time series.
    #[error("time series must be non-empty")]
    EmptySeries,

    /// Returned when a time series contains NaN, infinity, or negative infinity.
    #[error("time series contains non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },

    /// Returned when z-normalizing a series whose values are all identical.
    #[error("cannot z-normalize a constant series of length {n} (value {value})")]
    ConstantSeries {
        /// Length of the series.
        n: usize,
        /// The repeated value.
        value: f64,
    },

    /// Returned when fewer than two symbols are requested.
    #[error("cardinality must be at least 2, got {cardinality}")]
    InvalidCardinality {
        /// The invalid cardinality.
        cardinality: usize,
    },

    /// Returned when a configuration asks for zero segments.
    #[error("word length must be at least 1")]
    ZeroWordLength,

    /// Returned when the word length is zero or exceeds the series length.
    #[error("word length must be in 1..={len}, got {word_length}")]
    InvalidWordLength {
        /// The requested word length.
        word_length: usize,
        /// Length of the series being aggregated.
        len: usize,
    },

    /// Returned by exact segmentation when the series length is not a multiple of the word length.
    #[error("series length {len} is not divisible by word length {word_length}")]
    IndivisibleLength {
        /// Length of the series being aggregated.
        len: usize,
        /// The requested word length.
        word_length: usize,
    },

    /// Returned when parsing an unrecognized representation tag.
    #[error("unknown representation \"{tag}\" (expected binary, letter, or integer)")]
    UnknownRepresentation {
        /// The tag that failed to parse.
        tag: String,
    },

    /// Returned when parsing an unrecognized segmentation policy name.
    #[error("unknown segmentation \"{tag}\" (expected exact or proportional)")]
    UnknownSegmentation {
        /// The tag that failed to parse.
        tag: String,
    },

    /// Returned when a letter alphabet is requested for more than 26 symbols.
    #[error("letter representation supports at most 26 symbols, got {cardinality}")]
    LetterCardinality {
        /// The requested cardinality.
        cardinality: usize,
    },

    /// Returned when a symbol is not part of the alphabet it is compared under.
    #[error("symbol \"{symbol}\" is not in the alphabet")]
    UnknownSymbol {
        /// The offending symbol.
        symbol: String,
    },

    /// Returned when comparing two words built with different cardinalities.
    #[error("cardinality mismatch: {left} vs {right}")]
    CardinalityMismatch {
        /// Cardinality of the left-hand word.
        left: usize,
        /// Cardinality of the right-hand word.
        right: usize,
    },

    /// Returned when a requested generated length is zero.
    #[error("series length must be at least 1, got {len}")]
    InvalidLength {
        /// The requested length.
        len: usize,
    },

    /// Returned when two sequences that must align have different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left-hand input.
        left: usize,
        /// Length of the right-hand input.
        right: usize,
    },
}

impl SaxError {
    /// Classify this error as an invalid parameter or a length mismatch.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            _ => ErrorKind::InvalidParameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_kind() {
        let err = SaxError::LengthMismatch { left: 2, right: 1 };
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    }

    #[test]
    fn parameter_errors_kind() {
        let errors = [
            SaxError::EmptySeries,
            SaxError::InvalidCardinality { cardinality: 1 },
            SaxError::InvalidWordLength { word_length: 0, len: 3 },
            SaxError::UnknownRepresentation { tag: "hex".into() },
            SaxError::CardinalityMismatch { left: 4, right: 8 },
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::InvalidParameter, "{err}");
        }
    }

    #[test]
    fn display_mentions_values() {
        let err = SaxError::IndivisibleLength { len: 10, word_length: 3 };
        assert_eq!(err.to_string(), "series length 10 is not divisible by word length 3");
    }
}
