//! Date-axis filtering.
//!
//! Two distinct no-cutoff behaviors exist on purpose and are separate named
//! operations. `filter_exact` keeps every index when there is no cutoff
//! (single-series callers that already decided trimming is unnecessary);
//! `filter_auto_trim` drops the leading run where every trace is absent or
//! zero (multi-trace bundles whose series start later than the shared axis).

use super::cutoff::resolve_cutoff;
use crate::domain::{SeriesBundle, TimeRange};
use chrono::NaiveDate;

/// Indices with `date >= cutoff`. No cutoff keeps every index; an empty
/// axis yields an empty index set.
pub fn filter_exact(dates: &[NaiveDate], cutoff: Option<NaiveDate>) -> Vec<usize> {
    match cutoff {
        None => (0..dates.len()).collect(),
        Some(cut) => dates
            .iter()
            .enumerate()
            .filter(|(_, date)| **date >= cut)
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Resolve `range` against `today` and filter exactly. `ALL` is the
/// identity here.
pub fn filter_by_range(dates: &[NaiveDate], range: TimeRange, today: NaiveDate) -> Vec<usize> {
    filter_exact(dates, resolve_cutoff(range, today))
}

/// Indices from the first index where ANY trace has a present, finite,
/// non-zero value. If no trace ever does, every index is kept unchanged.
///
/// Traces shorter than the axis read as absent past their end; they are
/// not validated against the axis length here.
pub fn filter_auto_trim(dates: &[NaiveDate], traces: &[&[f64]]) -> Vec<usize> {
    let first_live = (0..dates.len()).find(|&i| {
        traces
            .iter()
            .any(|trace| trace.get(i).is_some_and(|v| v.is_finite() && *v != 0.0))
    });

    match first_live {
        Some(first) => (first..dates.len()).collect(),
        None => (0..dates.len()).collect(),
    }
}

/// Auto-trim across every trace of a bundle.
pub fn filter_auto_trim_bundle(bundle: &SeriesBundle) -> Vec<usize> {
    let traces: Vec<&[f64]> = bundle
        .trace_names()
        .filter_map(|name| bundle.trace(name))
        .collect();
    filter_auto_trim(bundle.dates(), &traces)
}
