//! Rate of Change (ROC).
//!
//! Percentage change over N index steps:
//! roc[t] = (v[t] - v[t-period]) / v[t-period] * 100
//!
//! Output is sparse: points whose lagged reference is missing or exactly
//! zero are omitted (the reference is a denominator), as are points whose
//! current value is missing. Each kept point carries the CURRENT index's
//! date; the output axis is not lag-realigned.

use crate::domain::XySeries;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Roc {
    period: usize,
}

impl Roc {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ROC period must be >= 1");
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn compute(&self, dates: &[NaiveDate], values: &[f64]) -> XySeries {
        let n = dates.len().min(values.len());
        let mut out = XySeries::with_capacity(n.saturating_sub(self.period));

        for i in self.period..n {
            let base = values[i - self.period];
            let curr = values[i];
            if base.is_nan() || base == 0.0 || curr.is_nan() {
                continue;
            }
            out.push(dates[i], (curr - base) / base * 100.0);
        }

        out
    }
}
