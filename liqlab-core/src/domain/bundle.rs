//! Named traces on a shared date axis.
//!
//! The data pipeline delivers a bundle of parallel arrays keyed by series
//! name, all sharing one ascending, gap-tolerant date axis. The bundle is
//! the one place where the `len(trace) == len(dates)` invariant is enforced;
//! everything downstream assumes it and degrades gracefully if callers
//! bypass the bundle with raw slices.

use crate::error::EngineError;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A shared date axis plus named value traces, missing values as NaN.
#[derive(Debug, Clone, Default)]
pub struct SeriesBundle {
    dates: Vec<NaiveDate>,
    traces: BTreeMap<String, Vec<f64>>,
}

impl SeriesBundle {
    pub fn new(dates: Vec<NaiveDate>) -> Self {
        Self {
            dates,
            traces: BTreeMap::new(),
        }
    }

    /// Insert a named trace. The trace must be index-aligned 1:1 with the
    /// date axis.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), EngineError> {
        let name = name.into();
        if values.len() != self.dates.len() {
            return Err(EngineError::LengthMismatch {
                name,
                len: values.len(),
                expected: self.dates.len(),
            });
        }
        self.traces.insert(name, values);
        Ok(())
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn trace(&self, name: &str) -> Option<&[f64]> {
        self.traces.get(name).map(|v| v.as_slice())
    }

    /// Value of a named trace at an index. Out-of-range indices and unknown
    /// names read as absent.
    pub fn value(&self, name: &str, index: usize) -> Option<f64> {
        self.traces.get(name).and_then(|v| v.get(index).copied())
    }

    pub fn trace_names(&self) -> impl Iterator<Item = &str> {
        self.traces.keys().map(|k| k.as_str())
    }

    pub fn trace_count(&self) -> usize {
        self.traces.len()
    }

    /// Length of the date axis.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Restrict the bundle to an index subset (the output of a range
    /// filter), preserving trace names. Out-of-range indices are skipped.
    pub fn select(&self, indices: &[usize]) -> SeriesBundle {
        let keep: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.dates.len())
            .collect();

        let dates = keep.iter().map(|&i| self.dates[i]).collect();
        let traces = self
            .traces
            .iter()
            .map(|(name, values)| {
                let filtered = keep.iter().map(|&i| values[i]).collect();
                (name.clone(), filtered)
            })
            .collect();

        SeriesBundle { dates, traces }
    }
}
