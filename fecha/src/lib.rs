#![deny(warnings)]

//! Naive dates and times with field defaulting and calendar arithmetic.
//!
//! ```
//! use fecha::{Date, Period, Time};
//!
//! assert_eq!(Time::new(22).unwrap().to_string(), "22:00:00");
//! let d = Date::new(2017).unwrap();
//! assert_eq!(d.to_string(), "2017-01-01");
//! assert_eq!(d.prev_by(1, Period::Month).unwrap(), Date::new((2016, 12)).unwrap());
//! ```

pub mod constants;

mod error;
pub use crate::error::{Error, Result};

mod types;
pub use crate::types::{Period, Weekday};

mod utils;

mod clock;
pub use crate::clock::{Clock, FixedClock, SystemClock};

mod config;
pub use crate::config::Calendar;

mod time;
pub use crate::time::{Time, TimeFields};

mod date;
pub use crate::date::{Date, DateFields};

mod timezone;
pub use crate::timezone::Timezone;

mod datetime;
pub use crate::datetime::DateTime;

mod timestamp;
pub use crate::timestamp::{Precision, timestamp, timestamp_now};
