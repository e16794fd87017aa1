//! Error type shared by the metrics and scaling helpers.

/// Errors from forecast-error metrics and scaling helpers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    /// Returned when a metric is asked to summarize zero observations.
    #[error("input must be non-empty")]
    EmptyInput,

    /// Returned when the two compared series have different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first series.
        left: usize,
        /// Length of the second series.
        right: usize,
    },

    /// Returned by percentage errors when an actual value is zero.
    #[error("actual value at index {index} is zero; percentage error is undefined")]
    ZeroActual {
        /// Position of the zero.
        index: usize,
    },

    /// Returned when min-max scaling a series with no spread.
    #[error("cannot min-max scale a constant series (value {value})")]
    ConstantSeries {
        /// The repeated value.
        value: f64,
    },
}
