//! One-hot encoding of categorical values.

use std::collections::BTreeSet;

use tracing::debug;

/// Indicator columns for a categorical variable.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHot<T> {
    /// Distinct categories in ascending order; column `j` is `categories[j]`.
    pub categories: Vec<T>,
    /// One row per input value, with a single `1.0` in its category's column.
    pub rows: Vec<Vec<f64>>,
}

/// Encode each value as an indicator row over the sorted set of distinct values.
///
/// Empty input yields no categories and no rows.
#[must_use]
pub fn one_hot<T: Ord + Clone>(values: &[T]) -> OneHot<T> {
    let categories: Vec<T> = values.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
    let rows = values
        .iter()
        .map(|v| {
            let mut row = vec![0.0; categories.len()];
            // Every value is present in `categories` by construction.
            if let Ok(col) = categories.binary_search(v) {
                row[col] = 1.0;
            }
            row
        })
        .collect();
    debug!(n_values = values.len(), n_categories = categories.len(), "one-hot encoded");
    OneHot { categories, rows }
}
