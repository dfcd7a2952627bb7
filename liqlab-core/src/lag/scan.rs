//! Bounded lag-correlation search.
//!
//! Scans candidate integer lags from `min_lag` to `max_lag` by `step`,
//! pairing `signal[i]` with `target[i + lag]` and keeping the lag with the
//! highest Pearson correlation. The stride is the cost control that keeps
//! one scan at O(lag_range / step * series_length), cheap enough to re-run
//! on every upstream change; correctness tests pin step = 1 while dashboard
//! call sites use a coarser stride.

use super::pearson::pearson;
use serde::{Deserialize, Serialize};

/// Best-fit lag and its correlation, produced fresh per scan.
///
/// Sign convention follows the pairing `(signal[i], target[i + lag])`: a
/// positive lag means the signal leads the target by that many steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagResult {
    pub lag: i64,
    pub correlation: f64,
}

impl LagResult {
    /// Neutral result: no candidate lag had usable pairing.
    pub fn neutral() -> Self {
        Self {
            lag: 0,
            correlation: 0.0,
        }
    }
}

/// Candidate-lag scan bounds and stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LagScan {
    min_lag: i64,
    max_lag: i64,
    step: i64,
}

impl LagScan {
    pub fn new(min_lag: i64, max_lag: i64, step: i64) -> Self {
        assert!(step >= 1, "lag scan step must be >= 1");
        assert!(min_lag <= max_lag, "min_lag must be <= max_lag");
        Self {
            min_lag,
            max_lag,
            step,
        }
    }

    pub fn min_lag(&self) -> i64 {
        self.min_lag
    }

    pub fn max_lag(&self) -> i64 {
        self.max_lag
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Find the candidate lag maximizing Pearson correlation.
    ///
    /// Starts from the neutral result, so a scan where every candidate has
    /// fewer than two clean pairs (or correlates non-positively) reports
    /// `{lag: 0, correlation: 0}`. Strict `>` keeps the first-found winner
    /// on ties; the scan proceeds from `min_lag` upward.
    pub fn find_optimal(&self, signal: &[f64], target: &[f64]) -> LagResult {
        let mut best = LagResult::neutral();

        let mut lag = self.min_lag;
        while lag <= self.max_lag {
            let (xs, ys) = paired_samples(signal, target, lag);
            if xs.len() >= 2 {
                let correlation = pearson(&xs, &ys);
                if correlation > best.correlation {
                    best = LagResult { lag, correlation };
                }
            }
            lag += self.step;
        }

        tracing::debug!(
            lag = best.lag,
            correlation = best.correlation,
            "lag scan complete"
        );
        best
    }
}

/// Pair `signal[i]` with `target[i + lag]` wherever the shifted index is in
/// range and both values are present.
fn paired_samples(signal: &[f64], target: &[f64], lag: i64) -> (Vec<f64>, Vec<f64>) {
    let target_len = target.len() as i64;
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (i, &s) in signal.iter().enumerate() {
        let shifted = i as i64 + lag;
        if shifted < 0 || shifted >= target_len {
            continue;
        }
        let t = target[shifted as usize];
        if s.is_nan() || t.is_nan() {
            continue;
        }
        xs.push(s);
        ys.push(t);
    }

    (xs, ys)
}
