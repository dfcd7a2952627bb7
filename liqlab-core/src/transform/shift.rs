//! Index-based lag shifting.
//!
//! The value at source index `i` is re-dated to `dates[i + lag_days]`;
//! pairs whose target index leaves `[0, len(dates))` are dropped, and a
//! zero lag is the identity. Index steps stand in for calendar days, so
//! the shift drifts on axes with weekend/holiday gaps; the chart overlays
//! accept that imprecision in exchange for staying on the shared axis.

use crate::domain::XySeries;
use chrono::NaiveDate;

pub fn shift_series(dates: &[NaiveDate], values: &[f64], lag_days: i64) -> XySeries {
    let axis_len = dates.len() as i64;
    let mut out = XySeries::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        let target = i as i64 + lag_days;
        if target < 0 || target >= axis_len {
            continue;
        }
        out.push(dates[target as usize], value);
    }

    out
}
