use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, NaiveTime, NaiveDate, TimeZone};

use crate::clock::{Clock, SystemClock};
use crate::config::Calendar;
use crate::date::Date;
use crate::error::{Error, Result};
use crate::time::Time;
use crate::timezone::Timezone;
use crate::types::Period;

const SECONDS_PER_DAY: i64 = 24 * 3600;

// Characters allowed between the date and the time when parsing
const SEPARATORS: &[char] = &[' ', '.', ',', '@', ':', 'T'];


/// A `Date` and a `Time` labeled with a `Timezone`.
///
/// The zone only decides the offset shown by `iso_string` and the label
/// shown by `Display`, no conversion between zones takes place.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct DateTime {
    date: Date,
    time: Time,
    timezone: Timezone,
}

impl DateTime {
    pub fn new(date: Date, time: Time) -> DateTime {
        DateTime { date, time, timezone: Calendar::global().timezone }
    }

    pub fn with_timezone(self, timezone: Timezone) -> DateTime {
        DateTime { timezone, ..self }
    }

    pub fn now() -> Result<DateTime> {
        DateTime::now_from(&SystemClock)
    }

    pub fn now_from(clock: &impl Clock) -> Result<DateTime> {
        DateTime::try_from(clock.now())
    }

    /// Local date and time of a POSIX timestamp in the system's zone.
    pub fn from_timestamp(seconds: i64) -> Result<DateTime> {
        let local = Local.timestamp_opt(seconds, 0).single()
            .ok_or(Error::TimestampOutOfRange(seconds))?;
        DateTime::try_from(local.naive_local())
    }

    /// POSIX timestamp of this date and time read in the system's zone.
    /// Fails on local times skipped or repeated by a DST transition.
    pub fn timestamp(&self) -> Result<i64> {
        Local.from_local_datetime(&self.naive()).single()
            .map(|local| local.timestamp())
            .ok_or_else(|| Error::AmbiguousLocalTime(self.to_string()))
    }

    pub fn date(&self) -> Date { self.date }

    pub fn time(&self) -> Time { self.time }

    pub fn timezone(&self) -> Timezone { self.timezone }

    /// Hours behind UTC according to the zone's DST rules.
    pub fn offset_hours(&self) -> i32 {
        self.timezone.offset_hours(&self.date)
    }

    pub fn naive(&self) -> NaiveDateTime {
        NaiveDate::from(self.date).and_time(NaiveTime::from(self.time))
    }

    /// Seconds from self to `other`, positive if `other` is later.
    pub fn diff(&self, other: &DateTime) -> i64 {
        self.date.diff(&other.date, Period::Day) * SECONDS_PER_DAY
            + self.time.diff(&other.time)
    }

    /// Seconds elapsed from self until now.
    pub fn since(&self) -> Result<i64> {
        self.since_at(&SystemClock)
    }

    pub fn since_at(&self, clock: &impl Clock) -> Result<i64> {
        Ok(self.diff(&DateTime::now_from(clock)?))
    }

    /// Date and time `seconds` after self (before if negative).
    pub fn shift(&self, seconds: i64) -> Result<DateTime> {
        let total = self.time.seconds_from_midnight().saturating_add(seconds);
        let date = self.date.shift(total.div_euclid(SECONDS_PER_DAY), Period::Day)?;
        let time = Time::start_of_day() + total.rem_euclid(SECONDS_PER_DAY);
        Ok(DateTime { date, time, timezone: self.timezone })
    }

    /// eg: `2015-03-05T14:22:00.000000-05:00`
    pub fn iso_string(&self) -> String {
        format!("{}T{}.000000-{:02}:00", self.date, self.time, self.offset_hours())
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        DateTime::new(date, Time::start_of_day())
    }
}

impl From<(Date, Time)> for DateTime {
    fn from((date, time): (Date, Time)) -> Self {
        DateTime::new(date, time)
    }
}

impl TryFrom<NaiveDateTime> for DateTime {
    type Error = Error;
    fn try_from(dt: NaiveDateTime) -> Result<DateTime> {
        Ok(DateTime::new(Date::try_from(dt.date())?, Time::from(dt.time())))
    }
}

impl From<DateTime> for NaiveDateTime {
    fn from(dt: DateTime) -> Self { dt.naive() }
}

/// Parses a date and a time joined by one of ` .,@:T`, eg: `2015-05-17 15:33:26`
/// or `2015-3-11,0:0`.
impl FromStr for DateTime {
    type Err = Error;
    fn from_str(s: &str) -> Result<DateTime> {
        let invalid = || Error::InvalidDateTime(s.to_string());
        let split = s.find(|c: char| !(c.is_ascii_digit() || c == '-'))
            .ok_or_else(invalid)?;
        let (date, rest) = s.split_at(split);
        let mut rest = rest.chars();
        match rest.next() {
            Some(sep) if SEPARATORS.contains(&sep) => {}
            _ => return Err(invalid()),
        }
        let parsed = date.parse::<Date>()
            .and_then(|date| Ok(DateTime::new(date, rest.as_str().parse()?)));
        parsed.map_err(|e| {
            log::trace!("rejecting date/time {:?}: {}", s, e);
            invalid()
        })
    }
}

impl TryFrom<&str> for DateTime {
    type Error = Error;
    fn try_from(s: &str) -> Result<DateTime> { s.parse() }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.time, self.timezone)
    }
}
