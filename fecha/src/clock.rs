use chrono::NaiveDateTime;

/// Source of the current local wall-clock reading.
///
/// `Time::now`, `Date::today` and `DateTime::now` read the `SystemClock`;
/// their `*_from` variants accept any clock so time-dependent code can be
/// exercised at a fixed instant.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the operating system's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
