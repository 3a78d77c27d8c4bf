//! Input validation utilities
//!
//! Parsers return `None` on malformed input; the `validate_*` wrappers adapt
//! them to `validator` custom rules used by the request DTOs.

use chrono::NaiveDate;
use validator::ValidationError;

use crate::constants::{MAX_SCORE, MIN_SCORE};

use super::time::parse_iso_date;

/// Largest integer a double represents exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Parse a record id: any decimal number with no fractional part, strictly
/// greater than zero and within the exactly representable integer range.
///
/// `"5.0"` and `"1e3"` are ids; `"1.5"` is not.
pub fn parse_positive_id(raw: &str) -> Option<i64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0 && *v > 0.0 && *v <= MAX_SAFE_INTEGER)
        .map(|v| v as i64)
}

/// Parse a score: any finite number within the inclusive score bounds
pub fn parse_score(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(v))
}

/// Parse an ISO 8601 date (see [`parse_iso_date`])
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_iso_date(raw)
}

pub fn validate_positive_id(raw: &str) -> Result<(), ValidationError> {
    parse_positive_id(raw)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("positive_integer"))
}

pub fn validate_score(raw: &str) -> Result<(), ValidationError> {
    parse_score(raw)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("score_range"))
}

pub fn validate_iso_date(raw: &str) -> Result<(), ValidationError> {
    parse_date(raw)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("iso_date"))
}
