//! Structured error types for the engine's ingestion boundary.
//!
//! Compute paths never raise for missing data; numeric degeneracy yields
//! neutral outputs (empty series, zero correlation, score 50). These errors
//! cover only malformed caller input where the contract is checkable up
//! front: trace/axis length mismatches, unparseable dates, unknown range
//! tokens.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("trace '{name}' has {len} values but the date axis has {expected}")]
    LengthMismatch {
        name: String,
        len: usize,
        expected: usize,
    },

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("unknown time range '{0}'")]
    UnknownRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_names_the_trace() {
        let err = EngineError::LengthMismatch {
            name: "fed_liquidity".into(),
            len: 9,
            expected: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("fed_liquidity"));
        assert!(msg.contains('9'));
        assert!(msg.contains("10"));
    }

    #[test]
    fn invalid_date_mentions_expected_format() {
        let err = EngineError::InvalidDate("01/02/2024".into());
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
