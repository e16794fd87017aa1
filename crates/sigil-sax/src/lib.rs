//! SAX symbolic discretization of time series.
//!
//! Pure math library, zero I/O. Provides equiprobable N(0, 1) breakpoints,
//! Piecewise Aggregate Approximation with exact or proportional segmentation,
//! SAX words in binary, letter, or integer renderings, and the MINDIST word
//! distance that lower-bounds the Euclidean distance between z-normalized series.

mod alphabet;
mod breakpoints;
mod config;
mod distance;
mod error;
mod generate;
mod matrix;
mod mindist;
mod paa;
mod preprocess;
mod sax;
mod series;

pub use alphabet::{MAX_LETTER_CARDINALITY, Representation, symbols};
pub use breakpoints::breakpoints;
pub use config::{SaxConfig, SaxTransform};
pub use distance::{SaxDistance, euclidean_distance};
pub use error::{ErrorKind, SaxError};
pub use generate::{random_walk, random_walk_with};
pub use matrix::DistanceMatrix;
pub use mindist::{symbol_distance, word_distance};
pub use paa::{Segmentation, aggregate};
pub use preprocess::{z_normalize, z_normalize_batch};
pub use sax::{SaxWord, discretize};
pub use series::{TimeSeries, TimeSeriesView};
