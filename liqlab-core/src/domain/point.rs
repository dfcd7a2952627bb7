//! Time-indexed points and parallel-array series.
//!
//! The pipeline hands the engine parallel arrays over one shared date axis.
//! Internally every trace is a `Vec<f64>` with `f64::NAN` as the missing
//! marker; the `Option<f64>` form exists only at the ingestion boundary.

use crate::error::EngineError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw observation: a calendar day and an optional value.
///
/// `None` marks missing data for that date (series that start later than
/// the shared axis, holiday gaps, failed upstream joins).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl TimePoint {
    pub fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }

    /// The internal missing marker is NaN.
    pub fn value_or_nan(&self) -> f64 {
        self.value.unwrap_or(f64::NAN)
    }
}

/// A strictly valid chart point: finite value, part of a time-sorted list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: NaiveDate,
    pub value: f64,
}

/// Parallel x/y arrays index-aligned to a (possibly filtered) date axis.
///
/// `y` may contain NaN where data is missing. Consumers that require
/// strictly valid, chronologically sorted points use [`XySeries::to_points`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XySeries {
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
}

impl XySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, date: NaiveDate, value: f64) {
        self.x.push(date);
        self.y.push(value);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Convert to a point list: non-finite values dropped, sorted ascending
    /// by time.
    pub fn to_points(&self) -> Vec<SeriesPoint> {
        let mut points: Vec<SeriesPoint> = self
            .x
            .iter()
            .zip(self.y.iter())
            .filter(|(_, v)| v.is_finite())
            .map(|(&time, &value)| SeriesPoint { time, value })
            .collect();
        points.sort_by_key(|p| p.time);
        points
    }
}

/// Parse the pipeline's ISO `YYYY-MM-DD` date strings into a date axis.
pub fn parse_iso_dates<S: AsRef<str>>(raw: &[S]) -> Result<Vec<NaiveDate>, EngineError> {
    raw.iter()
        .map(|s| {
            NaiveDate::parse_from_str(s.as_ref(), "%Y-%m-%d")
                .map_err(|_| EngineError::InvalidDate(s.as_ref().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn time_point_missing_maps_to_nan() {
        let p = TimePoint::new(d("2024-01-02"), None);
        assert!(p.value_or_nan().is_nan());
        let p = TimePoint::new(d("2024-01-02"), Some(3.5));
        assert_eq!(p.value_or_nan(), 3.5);
    }

    #[test]
    fn to_points_drops_invalid_and_sorts() {
        let mut xy = XySeries::new();
        xy.push(d("2024-01-03"), 2.0);
        xy.push(d("2024-01-02"), f64::NAN);
        xy.push(d("2024-01-01"), 1.0);
        xy.push(d("2024-01-04"), f64::INFINITY);

        let points = xy.to_points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].time, d("2024-01-01"));
        assert_eq!(points[0].value, 1.0);
        assert_eq!(points[1].time, d("2024-01-03"));
    }

    #[test]
    fn parse_iso_dates_accepts_pipeline_format() {
        let dates = parse_iso_dates(&["2024-01-01", "2024-01-02"]).unwrap();
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[1], d("2024-01-02"));
    }

    #[test]
    fn parse_iso_dates_rejects_malformed() {
        let err = parse_iso_dates(&["2024-01-01", "01/02/2024"]).unwrap_err();
        assert!(err.to_string().contains("01/02/2024"));
    }

    #[test]
    fn series_point_serialization_roundtrip() {
        let p = SeriesPoint {
            time: d("2024-01-02"),
            value: 21.0,
        };
        let json = serde_json::to_string(&p).unwrap();
        let deser: SeriesPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deser);
    }
}
