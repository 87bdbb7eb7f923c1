use std::fmt;
use std::str::FromStr;

use crate::date::Date;
use crate::error::Error;
use crate::types::Weekday;

/// Zones a `DateTime` can be labeled with. Only US Eastern is known.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Timezone {
    #[default]
    Est5Edt,
}

impl Timezone {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Timezone::Est5Edt => "EST",
        }
    }

    /// Hours behind UTC on `date`.
    ///
    /// Daylight saving runs from the second Sunday of March through the
    /// first Sunday of November, both days included.
    pub fn offset_hours(&self, date: &Date) -> i32 {
        match self {
            Timezone::Est5Edt => {
                let dst_start = Date::find_day(date.year(), 3, Weekday::Sunday, 2);
                let dst_end = Date::find_day(date.year(), 11, Weekday::Sunday, 1);
                match (dst_start, dst_end) {
                    (Ok(start), Ok(end)) if start <= *date && *date <= end => 4,
                    _ => 5,
                }
            }
        }
    }
}

impl FromStr for Timezone {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EST5EDT" | "EST" => Ok(Timezone::Est5Edt),
            _ => Err(Error::UnsupportedTimezone(s.to_string())),
        }
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(y: i32, m: u32, d: u32) -> i32 {
        let date = Date::from_ymd(y, m, d).unwrap();
        Timezone::default().offset_hours(&date)
    }

    #[test]
    fn test_offsets() {
        // 2015: dst from Mar 8 through Nov 1
        assert_eq!(offset(2015, 3, 5), 5);
        assert_eq!(offset(2015, 3, 7), 5);
        assert_eq!(offset(2015, 3, 8), 4);
        assert_eq!(offset(2015, 3, 15), 4);
        assert_eq!(offset(2015, 7, 4), 4);
        assert_eq!(offset(2015, 11, 1), 4);
        assert_eq!(offset(2015, 11, 2), 5);
        assert_eq!(offset(2015, 12, 25), 5);
        assert_eq!(offset(2015, 1, 1), 5);
        // range edges: 1500 dst from Mar 11 through Nov 4
        assert_eq!(offset(1500, 3, 10), 5);
        assert_eq!(offset(1500, 3, 11), 4);
        assert_eq!(offset(2500, 11, 7), 4);
        assert_eq!(offset(2500, 11, 8), 5);
    }

    #[test]
    fn test_names() {
        assert_eq!("est5edt".parse::<Timezone>(), Ok(Timezone::Est5Edt));
        assert_eq!("EST".parse::<Timezone>(), Ok(Timezone::Est5Edt));
        assert!("PST8PDT".parse::<Timezone>().is_err());
        assert_eq!(Timezone::Est5Edt.to_string(), "EST");
    }
}
