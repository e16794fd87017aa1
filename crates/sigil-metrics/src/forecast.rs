//! Point-forecast error metrics over paired observations.

use crate::error::MetricsError;

fn check_pair(a: &[f64], b: &[f64]) -> Result<f64, MetricsError> {
    if a.len() != b.len() {
        return Err(MetricsError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(MetricsError::EmptyInput);
    }
    Ok(a.len() as f64)
}

/// Relative errors `(actual - forecast) / actual`, rejecting zero actuals.
fn relative_errors<'a>(
    actual: &'a [f64],
    forecast: &'a [f64],
) -> Result<impl Iterator<Item = f64> + 'a, MetricsError> {
    check_pair(actual, forecast)?;
    if let Some(index) = actual.iter().position(|&a| a == 0.0) {
        return Err(MetricsError::ZeroActual { index });
    }
    Ok(actual.iter().zip(forecast).map(|(&a, &f)| (a - f) / a))
}

/// Mean squared error.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MetricsError::LengthMismatch`] | `a.len() != b.len()` |
/// | [`MetricsError::EmptyInput`] | Both inputs are empty |
pub fn mse(a: &[f64], b: &[f64]) -> Result<f64, MetricsError> {
    let n = check_pair(a, b)?;
    Ok(a.iter().zip(b).map(|(&x, &y)| (x - y).powi(2)).sum::<f64>() / n)
}

/// Root mean squared error, `sqrt(mse(a, b))`.
///
/// # Errors
///
/// Same as [`mse`].
pub fn rmse(a: &[f64], b: &[f64]) -> Result<f64, MetricsError> {
    mse(a, b).map(f64::sqrt)
}

/// Mean absolute error.
///
/// # Errors
///
/// Same as [`mse`].
pub fn mae(a: &[f64], b: &[f64]) -> Result<f64, MetricsError> {
    let n = check_pair(a, b)?;
    Ok(a.iter().zip(b).map(|(&x, &y)| (x - y).abs()).sum::<f64>() / n)
}

/// Mean absolute percentage error, as a fraction (0.1 means 10%).
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MetricsError::LengthMismatch`] | `actual.len() != forecast.len()` |
/// | [`MetricsError::EmptyInput`] | Both inputs are empty |
/// | [`MetricsError::ZeroActual`] | Any actual value is zero |
pub fn mape(actual: &[f64], forecast: &[f64]) -> Result<f64, MetricsError> {
    let n = actual.len() as f64;
    Ok(relative_errors(actual, forecast)?.map(f64::abs).sum::<f64>() / n)
}

/// Mean percentage error, as a signed fraction. Positive when the forecast
/// under-predicts on balance.
///
/// # Errors
///
/// Same as [`mape`].
pub fn mpe(actual: &[f64], forecast: &[f64]) -> Result<f64, MetricsError> {
    let n = actual.len() as f64;
    Ok(relative_errors(actual, forecast)?.sum::<f64>() / n)
}
