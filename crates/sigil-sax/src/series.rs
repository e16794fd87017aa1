//! Validated time series types shared by every transform.

use std::ops::Index;

use crate::error::SaxError;

fn validate(values: &[f64]) -> Result<(), SaxError> {
    if values.is_empty() {
        return Err(SaxError::EmptySeries);
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(SaxError::NonFiniteValue { index });
    }
    Ok(())
}

/// Owned, validated time series. Guaranteed non-empty with all finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries(Vec<f64>);

impl TimeSeries {
    /// Create a new time series, validating that it is non-empty and all values are finite.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SaxError::EmptySeries`] | `values` is empty |
    /// | [`SaxError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn new(values: Vec<f64>) -> Result<Self, SaxError> {
        validate(&values)?;
        Ok(Self(values))
    }

    /// Borrow this series as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> TimeSeriesView<'_> {
        TimeSeriesView::new_unchecked(&self.0)
    }

    /// Return the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed series; present for `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Arithmetic mean of all samples.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.as_view().mean()
    }

    /// Consume and return the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for TimeSeries {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for TimeSeries {
    type Error = SaxError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for TimeSeries {
    type Error = SaxError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::new(values.to_vec())
    }
}

/// Borrowed, validated view into a time series.
#[derive(Debug, Clone, Copy)]
pub struct TimeSeriesView<'a>(&'a [f64]);

impl<'a> TimeSeriesView<'a> {
    /// Create a new view, validating that the slice is non-empty and all values are finite.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SaxError::EmptySeries`] | `slice` is empty |
    /// | [`SaxError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn new(slice: &'a [f64]) -> Result<Self, SaxError> {
        validate(slice)?;
        Ok(Self(slice))
    }

    /// Create a view without validation. For internal use where data is already validated.
    pub(crate) fn new_unchecked(slice: &'a [f64]) -> Self {
        Self(slice)
    }

    /// Return the underlying slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.0
    }

    /// Return the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed view; present for `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Arithmetic mean of all samples.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.0.iter().sum::<f64>() / self.0.len() as f64
    }
}

impl Index<usize> for TimeSeriesView<'_> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AsRef<[f64]> for TimeSeriesView<'_> {
    fn as_ref(&self) -> &[f64] {
        self.0
    }
}

impl<'a> From<&'a TimeSeries> for TimeSeriesView<'a> {
    fn from(series: &'a TimeSeries) -> Self {
        series.as_view()
    }
}
