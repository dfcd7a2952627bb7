//! LiqLab Core — the signal analytics engine behind the liquidity dashboard.
//!
//! Transforms raw aligned time series (one shared date axis plus named
//! value traces) into the derived signals the chart layer renders:
//! - range resolution and date-axis filtering (`align`)
//! - rate-of-change, z-score, and index lag shifts (`transform`)
//! - bounded lag-correlation search (`lag`)
//! - sign-regime segmentation and forward projection (`regime`)
//! - equal-weight composite signals (`composite`)
//! - the bounded liquidity score (`score`)
//!
//! The engine is batch and pure: it never fetches, stores, or renders
//! data. Every call recomputes from its explicit inputs, and missing data
//! degrades to empty or neutral outputs instead of errors.

pub mod align;
pub mod composite;
pub mod domain;
pub mod error;
pub mod lag;
pub mod regime;
pub mod score;
pub mod transform;

pub use error::EngineError;
