//! Symbolic time-range selectors.
//!
//! The dashboard's range pickers offer a closed token set. Each visual
//! panel owns its own `TimeRange` value and passes it into the aligner
//! explicitly; there is no shared per-chart selection state inside the
//! engine.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A symbolic range token. Named ranges resolve to a concrete cutoff by
/// calendar arithmetic; `All` resolves to no cutoff and is special-cased
/// downstream (identity vs. auto-trim filtering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "3Y")]
    ThreeYears,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "ALL")]
    All,
}

impl TimeRange {
    /// Calendar months spanned by the range; `None` for [`TimeRange::All`].
    pub fn months(self) -> Option<u32> {
        match self {
            TimeRange::OneMonth => Some(1),
            TimeRange::ThreeMonths => Some(3),
            TimeRange::SixMonths => Some(6),
            TimeRange::OneYear => Some(12),
            TimeRange::ThreeYears => Some(36),
            TimeRange::FiveYears => Some(60),
            TimeRange::All => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::OneMonth => "1M",
            TimeRange::ThreeMonths => "3M",
            TimeRange::SixMonths => "6M",
            TimeRange::OneYear => "1Y",
            TimeRange::ThreeYears => "3Y",
            TimeRange::FiveYears => "5Y",
            TimeRange::All => "ALL",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1M" => Ok(TimeRange::OneMonth),
            "3M" => Ok(TimeRange::ThreeMonths),
            "6M" => Ok(TimeRange::SixMonths),
            "1Y" => Ok(TimeRange::OneYear),
            "3Y" => Ok(TimeRange::ThreeYears),
            "5Y" => Ok(TimeRange::FiveYears),
            "ALL" => Ok(TimeRange::All),
            other => Err(EngineError::UnknownRange(other.to_string())),
        }
    }
}
