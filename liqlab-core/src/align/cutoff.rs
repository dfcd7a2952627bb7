//! Range-selector resolution.
//!
//! Named ranges resolve to a concrete cutoff date by calendar month
//! subtraction (month/year arithmetic, not fixed day counts). `ALL`
//! resolves to no cutoff.

use crate::domain::TimeRange;
use chrono::{Months, NaiveDate, Utc};

/// Resolve a range selector against an explicit reference day.
///
/// Returns `None` for [`TimeRange::All`]; the no-cutoff path is
/// special-cased downstream (identity vs. auto-trim filtering). Day-of-month
/// overflow clamps to the end of the shorter month (Mar 31 minus one month
/// is Feb 29 in a leap year).
pub fn resolve_cutoff(range: TimeRange, today: NaiveDate) -> Option<NaiveDate> {
    range.months().map(|m| {
        today
            .checked_sub_months(Months::new(m))
            .unwrap_or(NaiveDate::MIN)
    })
}

/// Resolve against the current UTC day.
///
/// Convenience for call sites without their own clock; everything testable
/// goes through [`resolve_cutoff`] with an explicit day.
pub fn resolve_cutoff_now(range: TimeRange) -> Option<NaiveDate> {
    resolve_cutoff(range, Utc::now().date_naive())
}
