use sigil_metrics::{MetricsError, mae, mape, min_max_scale, mpe, mse, one_hot, rmse};
use sigil_sax::{SaxConfig, random_walk};

// ---------------------------------------------------------------------------
// a. Naive forecast of a random walk
// ---------------------------------------------------------------------------

/// Lagging a walk by one step leaves its N(0, 1) increments as the errors.
#[test]
fn naive_forecast_error_is_step_variance() {
    let walk = random_walk(20_001, 11).unwrap().into_inner();
    let (actual, forecast) = (&walk[1..], &walk[..20_000]);

    let mse = mse(actual, forecast).unwrap();
    assert!((mse - 1.0).abs() < 0.05, "mse {mse}");
    assert!((rmse(actual, forecast).unwrap() - mse.sqrt()).abs() < 1e-12);

    // E|Z| = sqrt(2 / pi) for a standard normal step.
    let mae = mae(actual, forecast).unwrap();
    assert!((mae - (2.0 / std::f64::consts::PI).sqrt()).abs() < 0.03, "mae {mae}");
}

#[test]
fn metrics_are_deterministic_for_a_seed() {
    let a = random_walk(501, 5).unwrap().into_inner();
    let b = random_walk(501, 5).unwrap().into_inner();
    assert_eq!(
        mse(&a[1..], &a[..500]).unwrap(),
        mse(&b[1..], &b[..500]).unwrap()
    );
}

#[test]
fn mape_bounds_mpe() {
    let walk: Vec<f64> = random_walk(301, 9)
        .unwrap()
        .into_inner()
        .into_iter()
        .map(|v| v + 100.0)
        .collect();
    let (actual, forecast) = (&walk[1..], &walk[..300]);
    let mape = mape(actual, forecast).unwrap();
    let mpe = mpe(actual, forecast).unwrap();
    assert!(mape >= mpe.abs());
}

// ---------------------------------------------------------------------------
// b. Error cases
// ---------------------------------------------------------------------------

#[test]
fn zero_actual_reports_position() {
    let err = mpe(&[1.0, 2.0, 0.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, MetricsError::ZeroActual { index: 2 });
    assert!(err.to_string().contains("index 2"));
}

#[test]
fn mismatched_lengths() {
    let err = mae(&[1.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, MetricsError::LengthMismatch { left: 1, right: 2 });
}

// ---------------------------------------------------------------------------
// c. Scaling and encoding SAX output
// ---------------------------------------------------------------------------

#[test]
fn scaled_walk_spans_unit_interval() {
    let walk = random_walk(256, 3).unwrap().into_inner();
    let scaled = min_max_scale(&walk).unwrap();
    let lo = scaled.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(lo, 0.0);
    assert_eq!(hi, 1.0);
}

/// One-hot encoding a SAX word yields the per-symbol counts as column sums.
#[test]
fn one_hot_of_sax_word_matches_frequency() {
    let series = random_walk(512, 21).unwrap();
    let config = SaxConfig::new(32, 6).unwrap();
    let word = config.transform(series.as_view()).unwrap().word;

    let encoded = one_hot(word.ordinals());
    let freq = word.symbol_frequency();
    for (col, &ordinal) in encoded.categories.iter().enumerate() {
        let column_sum: f64 = encoded.rows.iter().map(|row| row[col]).sum();
        assert_eq!(column_sum as usize, freq[ordinal]);
    }
    assert_eq!(encoded.rows.len(), 32);
}
