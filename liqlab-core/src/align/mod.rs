//! Time-range alignment: cutoff resolution and date-axis filtering.

pub mod cutoff;
pub mod filter;

pub use cutoff::{resolve_cutoff, resolve_cutoff_now};
pub use filter::{filter_auto_trim, filter_auto_trim_bundle, filter_by_range, filter_exact};
