use crate::constants::{MAX_YEAR, MIN_YEAR};

/// Errors produced while building, parsing or moving dates and times.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid hour: {0}")]
    InvalidHour(i32),

    #[error("Invalid minute: {0}")]
    InvalidMinute(i32),

    #[error("Invalid second: {0}")]
    InvalidSecond(i32),

    #[error("Invalid year ({min}-{max}): {0}", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i64),

    #[error("Invalid month: {0}")]
    InvalidMonth(i32),

    #[error("Invalid day (1-{last}): {day}")]
    InvalidDay { day: i32, last: u32 },

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Unsupported timezone: {0}")]
    UnsupportedTimezone(String),

    #[error("Cannot find day")]
    DayNotFound,

    #[error("to_date must be after this date")]
    EnvelopeOrder,

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    #[error("Local time does not map to a single instant: {0}")]
    AmbiguousLocalTime(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidSetting { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
