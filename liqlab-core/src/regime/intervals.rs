//! Run-length interval compression.
//!
//! Collapses a per-day label sequence into maximal same-label runs for
//! background-shading consumers. The runs partition the labeled range:
//! every date belongs to exactly one interval, adjacent intervals carry
//! different labels, and the final run always closes at the last index.

use super::classify::Regime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A maximal run of consecutive same-label days, endpoints inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub regime: Regime,
}

/// Compress labels into contiguous intervals over the common prefix of
/// `dates` and `regimes`. Empty input yields no intervals.
pub fn intervals(dates: &[NaiveDate], regimes: &[Regime]) -> Vec<RegimeInterval> {
    let n = dates.len().min(regimes.len());
    if n == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut run_start = 0;

    for i in 1..n {
        if regimes[i] != regimes[i - 1] {
            out.push(RegimeInterval {
                start: dates[run_start],
                end: dates[i - 1],
                regime: regimes[i - 1],
            });
            run_start = i;
        }
    }

    out.push(RegimeInterval {
        start: dates[run_start],
        end: dates[n - 1],
        regime: regimes[n - 1],
    });

    out
}
