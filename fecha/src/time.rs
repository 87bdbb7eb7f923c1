use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};


/// Time of day with second precision and no timezone.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Time(NaiveTime);

/// Leading time fields. Omitted minutes and seconds are zero.
pub trait TimeFields {
    fn hms(self) -> (i32, i32, i32);
}

impl TimeFields for i32 {
    fn hms(self) -> (i32, i32, i32) { (self, 0, 0) }
}

impl TimeFields for (i32, i32) {
    fn hms(self) -> (i32, i32, i32) { (self.0, self.1, 0) }
}

impl TimeFields for (i32, i32, i32) {
    fn hms(self) -> (i32, i32, i32) { self }
}

impl Time {
    /// `Time::new(22)` is 22:00:00, `Time::new((9, 30))` is 09:30:00.
    pub fn new(fields: impl TimeFields) -> Result<Time> {
        let (hour, minute, second) = fields.hms();
        if !(0..24).contains(&hour) { return Err(Error::InvalidHour(hour)) }
        if !(0..60).contains(&minute) { return Err(Error::InvalidMinute(minute)) }
        if !(0..60).contains(&second) { return Err(Error::InvalidSecond(second)) }
        NaiveTime::from_hms_opt(hour as u32, minute as u32, second as u32)
            .map(Time)
            .ok_or_else(|| Error::InvalidTime(format!("{}:{}:{}", hour, minute, second)))
    }

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Time> {
        let field = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Time::new((field(hour), field(minute), field(second)))
    }

    pub fn now() -> Time {
        Time::now_from(&SystemClock)
    }

    pub fn now_from(clock: &impl Clock) -> Time {
        Time::from(clock.now().time())
    }

    pub fn start_of_day() -> Time {
        Time(NaiveTime::MIN)
    }

    /// One second to midnight.
    pub fn end_of_day() -> Time {
        Time(NaiveTime::MIN) + (24 * 3600 - 1)
    }

    pub fn hour(&self) -> u32 { self.0.hour() }

    pub fn minute(&self) -> u32 { self.0.minute() }

    pub fn second(&self) -> u32 { self.0.second() }

    pub fn seconds_from_midnight(&self) -> i64 {
        self.0.num_seconds_from_midnight() as i64
    }

    /// Seconds from self to `other`, positive if `other` is later.
    pub fn diff(&self, other: &Time) -> i64 {
        other.seconds_from_midnight() - self.seconds_from_midnight()
    }
}

// Wraps around midnight, used by DateTime to split shifted instants
impl std::ops::Add<i64> for Time {
    type Output = Time;
    fn add(self, seconds: i64) -> Time {
        let secs = (self.seconds_from_midnight() + seconds.rem_euclid(24 * 3600))
            .rem_euclid(24 * 3600);
        // always in range after rem_euclid
        Time(NaiveTime::from_num_seconds_from_midnight_opt(secs as u32, 0)
             .unwrap_or(NaiveTime::MIN))
    }
}

impl From<NaiveTime> for Time {
    // Drops sub-second precision (and leap second nanos)
    fn from(t: NaiveTime) -> Self {
        Time(t.with_nanosecond(0).unwrap_or(t))
    }
}

impl From<Time> for NaiveTime {
    fn from(t: Time) -> Self { t.0 }
}

/// Parses `hh:mm` or `hh:mm:ss`, one or two digits per field.
impl FromStr for Time {
    type Err = Error;
    fn from_str(s: &str) -> Result<Time> {
        let invalid = || {
            log::trace!("rejecting time {:?}", s);
            Error::InvalidTime(s.to_string())
        };
        let fields = s.split(':')
            .map(|f| match f.len() {
                1 | 2 if f.bytes().all(|b| b.is_ascii_digit()) => f.parse::<i32>().ok(),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;
        match fields[..] {
            [h, m] => Time::new((h, m)),
            [h, m, s] => Time::new((h, m, s)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<&str> for Time {
    type Error = Error;
    fn try_from(s: &str) -> Result<Time> { s.parse() }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}
