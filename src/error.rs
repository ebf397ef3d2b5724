//! Errors for input construction and configuration loading.
//!
//! The computations themselves are total; only building their inputs can
//! fail.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Hour of day not in `0..=23`.
    #[error("hour {0} is outside 0..=23")]
    HourOutOfRange(i64),

    /// Month or day does not exist in the Gregorian calendar.
    #[error("{year:04}-{month:02}-{day:02} is not a valid Gregorian date")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// Date before January 1, 4713 BC (proleptic Julian), or too far ahead.
    #[error("date is outside the supported range")]
    DateOutOfRange,

    #[error("invalid scoring configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse scoring configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
