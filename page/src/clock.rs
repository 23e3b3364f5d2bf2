//! Calendar source for render-time values.
//!
//! The footer's copyright year is the only date-dependent output, so the
//! renderer asks a [`Clock`] instead of reading the system time directly.

use chrono::{Datelike, Local, NaiveDate};

/// Supplies "today" to the renderer.
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;

    /// The current calendar year.
    fn year(&self) -> i32 {
        self.today().year()
    }
}

/// Reads the local system date.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Clock pinned to `year-month-day`, or `None` for an invalid date.
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
