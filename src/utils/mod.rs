//! Utility functions

pub mod time;
pub mod validation;

pub use time::{now_utc, parse_datetime, parse_iso_date};
pub use validation::{parse_date, parse_positive_id, parse_score};
