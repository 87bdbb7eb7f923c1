use std::{fmt, ops};
use std::str::FromStr;

use crate::constants;
use crate::error::Error;


/// Calendar periods used to move, measure and envelope dates.
#[derive(Debug,PartialEq,Eq,PartialOrd,Ord,Hash,Clone,Copy)]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    pub const ALL: [Period; 4] =
        [Period::Day, Period::Week, Period::Month, Period::Year];

    pub fn code(&self) -> char {
        match self {
            Period::Day => 'd',
            Period::Week => 'w',
            Period::Month => 'm',
            Period::Year => 'y',
        }
    }
}

impl FromStr for Period {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        constants::period(s)
            .map(|idx| Period::ALL[idx])
            .ok_or_else(|| Error::InvalidPeriod(s.to_string()))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        };
        f.write_str(name)
    }
}


// Natural ordering is Monday-first, see config::Calendar for other week starts
#[derive(Debug,PartialEq,Eq,PartialOrd,Ord,Hash,Clone,Copy)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday,
        Weekday::Thursday, Weekday::Friday, Weekday::Saturday, Weekday::Sunday,
    ];

    /// Days since Monday.
    pub fn index(&self) -> u32 {
        *self as u32
    }

    /// Weekday for a Monday-based index, wrapping modulo 7.
    pub fn from_index(idx: i64) -> Weekday {
        Weekday::ALL[idx.rem_euclid(7) as usize]
    }

    pub fn succ(&self) -> Weekday { *self + 1 }

    pub fn pred(&self) -> Weekday { *self - 1 }

    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl ops::Add<i64> for Weekday {
    type Output = Weekday;
    fn add(self, n: i64) -> Weekday {
        Weekday::from_index(self.index() as i64 + n.rem_euclid(7))
    }
}

impl ops::Sub<i64> for Weekday {
    type Output = Weekday;
    fn sub(self, n: i64) -> Weekday {
        Weekday::from_index(self.index() as i64 - n.rem_euclid(7))
    }
}

// Difference in days between Monday-based indices
impl ops::Sub<Weekday> for Weekday {
    type Output = i64;
    fn sub(self, other: Weekday) -> i64 {
        self.index() as i64 - other.index() as i64
    }
}

impl FromStr for Weekday {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        constants::weekday(s)
            .map(|idx| Weekday::ALL[idx])
            .ok_or_else(|| Error::InvalidWeekday(s.to_string()))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(wd: chrono::Weekday) -> Self {
        Weekday::from_index(wd.num_days_from_monday() as i64)
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(wd: Weekday) -> Self {
        match wd {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_order() {
        assert!(Period::Week < Period::Month);
        assert!(!(Period::Week > Period::Month));
        assert_ne!(Period::Week, Period::Month);
        for pair in Period::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_period_names() {
        assert_eq!("m".parse::<Period>(), Ok(Period::Month));
        assert_eq!("Week".parse::<Period>(), Ok(Period::Week));
        assert!("quarter".parse::<Period>().is_err());
        assert_eq!(Period::Year.code(), 'y');
        assert_eq!(Period::Day.to_string(), "day");
    }

    #[test]
    fn test_weekday_add() {
        assert_eq!(Weekday::Monday + 1, Weekday::Tuesday);
        assert_eq!(Weekday::Monday + 7, Weekday::Monday);
        assert_eq!(Weekday::Monday + 8, Weekday::Tuesday);
        assert_eq!(Weekday::Sunday.succ(), Weekday::Monday);
        // i64::MAX is a multiple of 7
        assert_eq!(Weekday::Monday + i64::MAX, Weekday::Monday);
        assert_eq!(Weekday::Tuesday + i64::MIN, Weekday::Monday);
    }

    #[test]
    fn test_weekday_sub() {
        assert_eq!(Weekday::Monday - 1, Weekday::Sunday);
        assert_eq!(Weekday::Monday - 7, Weekday::Monday);
        assert_eq!(Weekday::Monday - 8, Weekday::Sunday);
        assert_eq!(Weekday::Monday.pred(), Weekday::Sunday);
        assert_eq!(Weekday::Tuesday - i64::MIN, Weekday::Wednesday);
        assert_eq!(Weekday::Friday - i64::MAX, Weekday::Friday);
        // difference
        assert_eq!(Weekday::Sunday - Weekday::Sunday, 0);
        assert_eq!(Weekday::Sunday - Weekday::Monday, 6);
        assert_eq!(Weekday::Monday - Weekday::Sunday, -6);
    }

    #[test]
    fn test_weekday_order() {
        assert!(Weekday::Monday < Weekday::Friday);
        assert!(!(Weekday::Monday > Weekday::Friday));
        assert_ne!(Weekday::Monday, Weekday::Friday);
        for pair in Weekday::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_weekday_chrono() {
        for wd in Weekday::ALL {
            let cwd: chrono::Weekday = wd.into();
            assert_eq!(Weekday::from(cwd), wd);
        }
        assert_eq!("fri".parse::<Weekday>(), Ok(Weekday::Friday));
        assert_eq!(Weekday::Saturday.to_string(), "Saturday");
    }
}
