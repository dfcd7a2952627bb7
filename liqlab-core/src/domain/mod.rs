//! Engine data model: points, date axes, named traces, range selectors.

pub mod bundle;
pub mod point;
pub mod range;

pub use bundle::SeriesBundle;
pub use point::{parse_iso_dates, SeriesPoint, TimePoint, XySeries};
pub use range::TimeRange;
