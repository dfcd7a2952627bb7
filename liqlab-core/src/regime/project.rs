//! Forward projection of regime labels.
//!
//! Re-dates the label computed at index `i` onto the axis date at
//! `i + lag_days`, synthesizing dates past the end of the axis by adding
//! calendar days to the last known date. The projected sequence is the
//! leading-indicator overlay: today's classification shades a future
//! window of the chart.

use super::classify::Regime;
use super::intervals::{intervals, RegimeInterval};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Regime labels re-dated onto a forward-shifted (partly synthetic) axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedRegimes {
    pub dates: Vec<NaiveDate>,
    pub regimes: Vec<Regime>,
}

impl ProjectedRegimes {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Interval compression of the projected sequence.
    pub fn intervals(&self) -> Vec<RegimeInterval> {
        intervals(&self.dates, &self.regimes)
    }
}

/// Project each label forward by `lag_days` index steps.
///
/// Targets inside the axis reuse its dates; targets past the end extend
/// from the last known date, one synthetic calendar day per index step.
pub fn project_forward(
    dates: &[NaiveDate],
    regimes: &[Regime],
    lag_days: usize,
) -> ProjectedRegimes {
    let n = dates.len().min(regimes.len());
    let mut out = ProjectedRegimes::default();
    if n == 0 {
        return out;
    }

    let last_index = dates.len() - 1;
    let last_known = dates[last_index];

    for i in 0..n {
        let target = i + lag_days;
        let date = if target <= last_index {
            dates[target]
        } else {
            last_known + Duration::days((target - last_index) as i64)
        };
        out.dates.push(date);
        out.regimes.push(regimes[i]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_dates(n: usize) -> Vec<NaiveDate> {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..n).map(|i| base + Duration::days(i as i64)).collect()
    }

    #[test]
    fn zero_lag_keeps_the_axis() {
        let dates = make_dates(3);
        let labels = [Regime::Bullish, Regime::Neutral, Regime::Bearish];
        let out = project_forward(&dates, &labels, 0);

        assert_eq!(out.dates, dates);
        assert_eq!(out.regimes, labels.to_vec());
    }

    #[test]
    fn in_range_targets_reuse_axis_dates() {
        let dates = make_dates(5);
        let labels = [Regime::Bullish; 5];
        let out = project_forward(&dates, &labels, 2);

        assert_eq!(out.dates[0], dates[2]);
        assert_eq!(out.dates[2], dates[4]);
    }

    #[test]
    fn past_the_end_extends_with_synthetic_days() {
        let dates = make_dates(5);
        let labels = [Regime::Bullish; 5];
        let out = project_forward(&dates, &labels, 2);

        // sources 3 and 4 land past the axis: last date + 1, + 2
        assert_eq!(out.dates[3], dates[4] + Duration::days(1));
        assert_eq!(out.dates[4], dates[4] + Duration::days(2));
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn projection_keeps_every_label() {
        let dates = make_dates(4);
        let labels = [
            Regime::Bullish,
            Regime::Bearish,
            Regime::Neutral,
            Regime::Bullish,
        ];
        let out = project_forward(&dates, &labels, 10);
        assert_eq!(out.regimes, labels.to_vec());
    }

    #[test]
    fn projected_intervals_tile_the_overlay() {
        let dates = make_dates(4);
        let labels = [
            Regime::Bullish,
            Regime::Bullish,
            Regime::Bearish,
            Regime::Bearish,
        ];
        let out = project_forward(&dates, &labels, 3).intervals();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].regime, Regime::Bullish);
        assert_eq!(out[1].regime, Regime::Bearish);
    }

    #[test]
    fn empty_input_projects_to_empty() {
        assert!(project_forward(&[], &[], 5).is_empty());
    }
}
