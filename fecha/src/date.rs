use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::clock::{Clock, SystemClock};
use crate::config::Calendar;
use crate::constants::{MAX_YEAR, MIN_YEAR};
use crate::error::{Error, Result};
use crate::types::{Period, Weekday};
use crate::utils;


/// Calendar date between the years 1500 and 2500, without timezone.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Date(NaiveDate);

/// Leading date fields. Omitted months and days are 1.
pub trait DateFields {
    fn ymd(self) -> (i32, i32, i32);
}

impl DateFields for i32 {
    fn ymd(self) -> (i32, i32, i32) { (self, 1, 1) }
}

impl DateFields for (i32, i32) {
    fn ymd(self) -> (i32, i32, i32) { (self.0, self.1, 1) }
}

impl DateFields for (i32, i32, i32) {
    fn ymd(self) -> (i32, i32, i32) { self }
}

impl Date {
    /// `Date::new(2017)` is 2017-01-01, `Date::new((2017, 6))` is 2017-06-01.
    pub fn new(fields: impl DateFields) -> Result<Date> {
        let (year, month, day) = fields.ymd();
        Date::checked(year as i64, month, day)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Date> {
        let field = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Date::new((year, field(month), field(day)))
    }

    fn checked(year: i64, month: i32, day: i32) -> Result<Date> {
        if year < MIN_YEAR as i64 || year > MAX_YEAR as i64 {
            return Err(Error::InvalidYear(year));
        }
        if !(1..=12).contains(&month) { return Err(Error::InvalidMonth(month)) }
        let last = utils::days_in_month(month as u32, year);
        if day < 1 || day as u32 > last {
            return Err(Error::InvalidDay { day, last });
        }
        NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
            .map(Date)
            .ok_or_else(|| Error::InvalidDate(format!("{}-{}-{}", year, month, day)))
    }

    // Days counted from 0001-01-01 as day 1
    fn from_ordinal(days: i64) -> Result<Date> {
        let naive = i32::try_from(days).ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt);
        match naive {
            Some(naive) => Date::try_from(naive),
            None => Err(beyond_range(days)),
        }
    }

    fn ordinal(&self) -> i64 {
        self.0.num_days_from_ce() as i64
    }

    pub fn today() -> Result<Date> {
        Date::today_from(&SystemClock)
    }

    pub fn today_from(clock: &impl Clock) -> Result<Date> {
        Date::try_from(clock.now().date())
    }

    /// The `n`th `weekday` within a month, eg: the 3rd Monday of January.
    /// Fails when the month has no such day (n is 1 through 5).
    pub fn find_day(year: i32, month: u32, weekday: Weekday, n: u32) -> Result<Date> {
        if n == 0 || n > 5 { return Err(Error::DayNotFound) }
        Date::from_ymd(year, month, 1)?;
        NaiveDate::from_weekday_of_month_opt(year, month, weekday.into(), n as u8)
            .ok_or(Error::DayNotFound)
            .and_then(Date::try_from)
    }

    pub fn year(&self) -> i32 { self.0.year() }

    pub fn month(&self) -> u32 { self.0.month() }

    pub fn day(&self) -> u32 { self.0.day() }

    pub fn weekday(&self) -> Weekday { self.0.weekday().into() }

    pub fn is_today(&self) -> bool {
        self.is_today_at(&SystemClock)
    }

    pub fn is_today_at(&self, clock: &impl Clock) -> bool {
        self.0 == clock.now().date()
    }

    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    pub fn is_leap(&self) -> bool {
        utils::is_leap_year(self.year() as i64)
    }

    /// Date `n` periods away from self, `n` can be negative.
    ///
    /// Month and year shifts keep the day of month, clamped to the length
    /// of the target month (Mar 31 minus a month is Feb 28/29).
    pub fn shift(&self, n: i64, period: Period) -> Result<Date> {
        match period {
            Period::Day => Date::from_ordinal(self.ordinal().saturating_add(n)),
            Period::Week => match n.checked_mul(7) {
                Some(days) => self.shift(days, Period::Day),
                None => Err(beyond_range(n)),
            },
            Period::Month => {
                let (year, month) =
                    utils::shift_months(self.year() as i64, self.month(), n);
                self.with_year_month(year, month)
            }
            Period::Year => self.with_year_month(
                (self.year() as i64).saturating_add(n), self.month()),
        }
    }

    fn with_year_month(&self, year: i64, month: u32) -> Result<Date> {
        if year < MIN_YEAR as i64 || year > MAX_YEAR as i64 {
            return Err(Error::InvalidYear(year));
        }
        let day = self.day().min(utils::days_in_month(month, year));
        Date::checked(year, month as i32, day as i32)
    }

    /// The following day.
    pub fn next(&self) -> Result<Date> { self.shift(1, Period::Day) }

    /// The previous day.
    pub fn prev(&self) -> Result<Date> { self.shift(-1, Period::Day) }

    pub fn next_by(&self, n: i64, period: Period) -> Result<Date> {
        self.shift(n, period)
    }

    pub fn prev_by(&self, n: i64, period: Period) -> Result<Date> {
        self.shift(n.saturating_neg(), period)
    }

    /// First and last day of the `period` that contains self, stretched to
    /// also contain `to` when given. Weeks follow `Calendar::global()`.
    pub fn envelope(&self, period: Period, to: Option<Date>) -> Result<(Date, Date)> {
        self.envelope_in(Calendar::global(), period, to)
    }

    pub fn envelope_in(&self, calendar: &Calendar, period: Period, to: Option<Date>)
        -> Result<(Date, Date)>
    {
        let to = to.unwrap_or(*self);
        if to < *self { return Err(Error::EnvelopeOrder) }
        match period {
            Period::Day => Ok((*self, to)),
            Period::Week => {
                let (first, last) = week_bounds(calendar, self, &to);
                Ok((Date::from_ordinal(first)?, Date::from_ordinal(last)?))
            }
            Period::Month => {
                let last = to.length(Period::Month) as u32;
                Ok((Date::from_ymd(self.year(), self.month(), 1)?,
                    Date::from_ymd(to.year(), to.month(), last)?))
            }
            Period::Year => Ok((Date::from_ymd(self.year(), 1, 1)?,
                                Date::from_ymd(to.year(), 12, 31)?)),
        }
    }

    /// Signed number of `period`s from self to `other`, positive if `other`
    /// is later. Weeks count the boundaries crossed between both weeks.
    pub fn diff(&self, other: &Date, period: Period) -> i64 {
        self.diff_in(Calendar::global(), other, period)
    }

    pub fn diff_in(&self, calendar: &Calendar, other: &Date, period: Period) -> i64 {
        match period {
            Period::Day => other.ordinal() - self.ordinal(),
            Period::Week => {
                if self <= other {
                    let (first, last) = week_bounds(calendar, self, other);
                    (last - first) / 7
                } else {
                    let (first, last) = week_bounds(calendar, other, self);
                    -((last - first) / 7)
                }
            }
            Period::Month => (other.year() as i64 - self.year() as i64) * 12
                + (other.month() as i64 - self.month() as i64),
            Period::Year => other.year() as i64 - self.year() as i64,
        }
    }

    /// Length in days of the `period` that contains self.
    pub fn length(&self, period: Period) -> i64 {
        match period {
            Period::Day => 1,
            Period::Week => 7,
            Period::Month => utils::days_in_month(self.month(), self.year() as i64) as i64,
            Period::Year => if self.is_leap() { 366 } else { 365 },
        }
    }

    /// Every day from self through `to`, both included. Runs backwards when
    /// `to` is earlier than self.
    pub fn range_to(&self, to: &Date) -> impl Iterator<Item=Date> {
        let n = self.diff(to, Period::Day);
        self.days(n)
    }

    /// `|n| + 1` consecutive days starting at self, backwards if `n` < 0.
    pub fn range_days(&self, n: i64) -> Result<impl Iterator<Item=Date>> {
        // check the far end, everything in between is valid then
        self.shift(n, Period::Day)?;
        Ok(self.days(n))
    }

    fn days(&self, n: i64) -> impl Iterator<Item=Date> {
        let start = self.ordinal();
        let sign = n.signum();
        (0..=n.abs()).filter_map(move |x| Date::from_ordinal(start + sign * x).ok())
    }
}

// Year just past the supported range, on the side `direction` points to
fn beyond_range(direction: i64) -> Error {
    if direction < 0 {
        Error::InvalidYear(MIN_YEAR as i64 - 1)
    } else {
        Error::InvalidYear(MAX_YEAR as i64 + 1)
    }
}

// Ordinals of the first day of `from`'s week and the last day of `to`'s week
fn week_bounds(calendar: &Calendar, from: &Date, to: &Date) -> (i64, i64) {
    let first = from.ordinal() - calendar.position(from.weekday()) as i64;
    let last = to.ordinal() + 6 - calendar.position(to.weekday()) as i64;
    (first, last)
}

impl TryFrom<NaiveDate> for Date {
    type Error = Error;
    fn try_from(d: NaiveDate) -> Result<Date> {
        Date::checked(d.year() as i64, d.month() as i32, d.day() as i32)
    }
}

impl From<Date> for NaiveDate {
    fn from(d: Date) -> Self { d.0 }
}

/// Parses `YYYY-MM-DD`, months and days may use a single digit.
impl FromStr for Date {
    type Err = Error;
    fn from_str(s: &str) -> Result<Date> {
        let digits = |f: &str, widths: &[usize]| {
            if widths.contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit()) {
                f.parse::<i32>().ok()
            } else {
                None
            }
        };
        let mut fields = s.split('-');
        let parsed = match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(y), Some(m), Some(d), None) =>
                digits(y, &[4]).zip(digits(m, &[1, 2])).zip(digits(d, &[1, 2])),
            _ => None,
        };
        match parsed {
            Some(((year, month), day)) => Date::new((year, month, day)),
            None => {
                log::trace!("rejecting date {:?}", s);
                Err(Error::InvalidDate(s.to_string()))
            }
        }
    }
}

impl TryFrom<&str> for Date {
    type Error = Error;
    fn try_from(s: &str) -> Result<Date> { s.parse() }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}
