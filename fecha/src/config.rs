use std::cmp::Ordering;
use std::env;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::timezone::Timezone;
use crate::types::Weekday;

pub const FIRST_DAY_OF_WEEK_ENV: &str = "FECHA_FIRST_DAY_OF_WEEK";
pub const TIMEZONE_ENV: &str = "FECHA_TIMEZONE";

static GLOBAL: OnceLock<Calendar> = OnceLock::new();

/// Settings that decide where weeks begin and which zone new `DateTime`s
/// are labeled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    pub first_day_of_week: Weekday,
    pub timezone: Timezone,
}

impl Default for Calendar {
    fn default() -> Self {
        Calendar {
            first_day_of_week: Weekday::Monday,
            timezone: Timezone::default(),
        }
    }
}

impl Calendar {
    pub fn with_first_day_of_week(self, first_day_of_week: Weekday) -> Self {
        Calendar { first_day_of_week, ..self }
    }

    pub fn with_timezone(self, timezone: Timezone) -> Self {
        Calendar { timezone, ..self }
    }

    /// Build from `FECHA_FIRST_DAY_OF_WEEK` and `FECHA_TIMEZONE`.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Calendar> {
        Calendar::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Calendar> {
        let mut calendar = Calendar::default();
        if let Some(value) = lookup(FIRST_DAY_OF_WEEK_ENV) {
            calendar.first_day_of_week = value.trim().parse()
                .map_err(|_| Error::InvalidSetting {
                    name: FIRST_DAY_OF_WEEK_ENV, value: value.clone() })?;
        }
        if let Some(value) = lookup(TIMEZONE_ENV) {
            calendar.timezone = value.trim().parse()
                .map_err(|_| Error::InvalidSetting {
                    name: TIMEZONE_ENV, value: value.clone() })?;
        }
        Ok(calendar)
    }

    /// Process-wide calendar, read from the environment on first use.
    pub fn global() -> &'static Calendar {
        GLOBAL.get_or_init(|| match Calendar::from_env() {
            Ok(calendar) => {
                log::debug!("calendar: first_day_of_week={} timezone={}",
                            calendar.first_day_of_week, calendar.timezone);
                calendar
            }
            Err(e) => {
                log::warn!("{}, using default calendar", e);
                Calendar::default()
            }
        })
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn last_day_of_week(&self) -> Weekday {
        self.first_day_of_week - 1
    }

    /// The seven weekdays in the order this calendar's week runs.
    pub fn week(&self) -> [Weekday; 7] {
        let first = self.first_day_of_week;
        std::array::from_fn(|i| first + i as i64)
    }

    /// Days between the start of the week and `weekday`.
    pub fn position(&self, weekday: Weekday) -> u32 {
        (weekday - self.first_day_of_week).rem_euclid(7) as u32
    }

    pub fn compare(&self, a: Weekday, b: Weekday) -> Ordering {
        self.position(a).cmp(&self.position(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn check_week(calendar: &Calendar) {
        let week = calendar.week();
        assert_eq!(week[0], calendar.first_day_of_week());
        assert_eq!(week[6], calendar.last_day_of_week());
        for pair in week.windows(2) {
            assert_eq!(calendar.compare(pair[0], pair[1]), Ordering::Less);
        }
        assert_eq!(calendar.compare(Weekday::Monday, Weekday::Friday),
                   Ordering::Less);
    }

    #[test]
    fn test_monday_first() {
        let calendar = Calendar::default();
        assert_eq!(calendar.first_day_of_week(), Weekday::Monday);
        assert_eq!(calendar.last_day_of_week(), Weekday::Sunday);
        assert_eq!(calendar.position(Weekday::Sunday), 6);
        check_week(&calendar);
    }

    #[test]
    fn test_sunday_first() {
        let calendar =
            Calendar::default().with_first_day_of_week(Weekday::Sunday);
        assert_eq!(calendar.last_day_of_week(), Weekday::Saturday);
        assert_eq!(calendar.position(Weekday::Sunday), 0);
        assert_eq!(calendar.compare(Weekday::Sunday, Weekday::Monday),
                   Ordering::Less);
        check_week(&calendar);
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (FIRST_DAY_OF_WEEK_ENV, " sunday "),
            (TIMEZONE_ENV, "EST5EDT"),
        ].into_iter().collect();
        let calendar = Calendar::from_lookup(
            |name| vars.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(calendar.first_day_of_week, Weekday::Sunday);
        assert_eq!(calendar.timezone, Timezone::Est5Edt);

        let calendar = Calendar::from_lookup(|_| None).unwrap();
        assert_eq!(calendar, Calendar::default());

        let err = Calendar::from_lookup(|name| match name {
            FIRST_DAY_OF_WEEK_ENV => Some("someday".to_string()),
            _ => None,
        }).unwrap_err();
        assert_eq!(err.to_string(),
                   "Invalid value for FECHA_FIRST_DAY_OF_WEEK: someday");
    }
}
