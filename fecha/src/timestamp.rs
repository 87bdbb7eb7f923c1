use crate::datetime::DateTime;
use crate::error::Result;

/// Unit of the integers returned by `timestamp_now`.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Precision {
    Seconds,
    Deciseconds,
    Centiseconds,
    #[default]
    Milliseconds,
    Microseconds,
}

impl Precision {
    pub fn per_second(&self) -> i64 {
        match self {
            Precision::Seconds => 1,
            Precision::Deciseconds => 10,
            Precision::Centiseconds => 100,
            Precision::Milliseconds => 1_000,
            Precision::Microseconds => 1_000_000,
        }
    }
}

/// POSIX timestamp in seconds of a `DateTime`, a `Date` (at midnight) or a
/// `(Date, Time)` pair, read in the system's local zone.
pub fn timestamp(value: impl Into<DateTime>) -> Result<i64> {
    value.into().timestamp()
}

/// Current POSIX time counted in units of `precision`.
pub fn timestamp_now(precision: Precision) -> i64 {
    let now = chrono::Utc::now();
    let per_second = precision.per_second();
    let fraction = now.timestamp_subsec_nanos() as i64 / (1_000_000_000 / per_second);
    now.timestamp() * per_second + fraction
}
