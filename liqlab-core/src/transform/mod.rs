//! Stateless numeric transforms on a single series.
//!
//! All transforms are pure functions over a date axis and a value slice
//! (NaN = missing). They allocate fresh output on every call; nothing is
//! mutated in place, so consumers can recompute on every upstream change.

pub mod roc;
pub mod shift;
pub mod zscore;

pub use roc::Roc;
pub use shift::shift_series;
pub use zscore::zscore;

/// Create a daily date axis starting 2024-01-01 for testing.
#[cfg(test)]
pub fn make_dates(n: usize) -> Vec<chrono::NaiveDate> {
    let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..n)
        .map(|i| base + chrono::Duration::days(i as i64))
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for transform tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
