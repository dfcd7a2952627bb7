//! Sign-based regime classification.
//!
//! Memoryless per-index rule over two signed signals: both positive is
//! bullish, both negative is bearish, anything else is neutral. NaN
//! compares false on both branches, so missing data lands in neutral.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete market-state label derived from the signs of two signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    Bullish,
    Bearish,
    Neutral,
}

impl Regime {
    pub fn as_str(self) -> &'static str {
        match self {
            Regime::Bullish => "bullish",
            Regime::Bearish => "bearish",
            Regime::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify one time step from the two signal values.
pub fn classify(a: f64, b: f64) -> Regime {
    if a > 0.0 && b > 0.0 {
        Regime::Bullish
    } else if a < 0.0 && b < 0.0 {
        Regime::Bearish
    } else {
        Regime::Neutral
    }
}

/// Classify every index over the common prefix of the two signals.
pub fn classify_series(a: &[f64], b: &[f64]) -> Vec<Regime> {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| classify(x, y))
        .collect()
}
