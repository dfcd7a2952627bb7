//! Z-score normalization.
//!
//! z[t] = (v[t] - mean) / stddev, population statistics over present
//! values only. Degenerate inputs never reach the division: fewer than two
//! present values returns the input unchanged, zero deviation returns a
//! same-length run of zeros.

/// Normalize a series to z-scores, preserving NaN markers.
pub fn zscore(values: &[f64]) -> Vec<f64> {
    let present: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if present.len() < 2 {
        return values.to_vec();
    }

    // identical present values must normalize to zeros even when summation
    // rounding leaves the computed variance slightly above zero
    let spread_is_zero = present.iter().all(|&v| v == present[0]);

    let n = present.len() as f64;
    let mean = present.iter().sum::<f64>() / n;
    let variance = present.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let stddev = variance.sqrt();

    if spread_is_zero || stddev == 0.0 {
        return vec![0.0; values.len()];
    }

    values
        .iter()
        .map(|&v| if v.is_nan() { f64::NAN } else { (v - mean) / stddev })
        .collect()
}
