//! Forecast-error metrics and scaling helpers for time series.
//!
//! RMSE, MSE, MAE, MAPE, and MPE over paired observations, min-max scaling,
//! and one-hot encoding of categorical values.

mod encode;
mod error;
mod forecast;
mod scale;

pub use encode::{OneHot, one_hot};
pub use error::MetricsError;
pub use forecast::{mae, mape, mpe, mse, rmse};
pub use scale::min_max_scale;
