use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::CelebrationError;

// Leap year used to validate month/day pairs so that 02-29 is accepted.
const LEAP_REFERENCE_YEAR: i32 = 2000;

/// A civil date without time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CelebrationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CelebrationError::MalformedDate { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub fn key(self) -> DateKey {
        DateKey {
            month: self.0.month(),
            day: self.0.day(),
        }
    }

    /// Shifts the date by a signed number of days, carrying across month and
    /// year boundaries. `None` when the result leaves chrono's date range.
    pub fn add_days(self, offset: i64) -> Option<Self> {
        let magnitude = Days::new(offset.unsigned_abs());
        let shifted = if offset < 0 {
            self.0.checked_sub_days(magnitude)
        } else {
            self.0.checked_add_days(magnitude)
        };
        shifted.map(Self)
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Year-independent month/day identity used for table lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    month: u32,
    day: u32,
}

impl DateKey {
    pub fn new(month: u32, day: u32) -> Result<Self, CelebrationError> {
        if NaiveDate::from_ymd_opt(LEAP_REFERENCE_YEAR, month, day).is_none() {
            return Err(CelebrationError::InvalidDateKey(format!(
                "{month:02}-{day:02}"
            )));
        }
        Ok(Self { month, day })
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// The date carrying this key in `year`. A 02-29 key in a common year
    /// overflows into 03-01.
    pub fn in_year(self, year: i32) -> Option<CalendarDate> {
        match NaiveDate::from_ymd_opt(year, self.month, self.day) {
            Some(date) => Some(CalendarDate(date)),
            None if self.month == 2 && self.day == 29 => {
                NaiveDate::from_ymd_opt(year, 3, 1).map(CalendarDate)
            }
            None => None,
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = CelebrationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || CelebrationError::InvalidDateKey(text.to_string());
        let (month, day) = text.split_once('-').ok_or_else(invalid)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(month) || !two_digits(day) {
            return Err(invalid());
        }
        let month = month.parse().map_err(|_| invalid())?;
        let day = day.parse().map_err(|_| invalid())?;
        Self::new(month, day).map_err(|_| invalid())
    }
}
