//! Calendar handling for the almanac method.
//!
//! Dates are proleptic Gregorian: the Gregorian leap-year rule is applied to every
//! year, including years before 1582 and negative (astronomical) years.

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// A validated proleptic Gregorian calendar date.
///
/// # Example
/// ```
/// # use solar_almanac::time::CalendarDate;
/// let date = CalendarDate::new(2024, 2, 29).unwrap();
/// assert_eq!(date.almanac_day_of_year(), 60);
///
/// assert!(CalendarDate::new(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a date after checking month and day against the proleptic Gregorian calendar.
    ///
    /// The year is not range-checked.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is not 1-12 or the day does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 {
            return Err(Error::invalid_date("day must be at least 1"));
        }
        if day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Day ordinal as computed by the almanac (step 1 of the method).
    ///
    /// `N = floor(275·month/9) − floor((month+9)/12)·N3 + day − 30` with
    /// `N3 = 1 + floor((year − 4·floor(year/4) + 2)/3)`. The `N3` term is the
    /// formula's only leap-year correction; it follows the plain divisible-by-4
    /// rule and is kept as published.
    #[must_use]
    pub const fn almanac_day_of_year(&self) -> i32 {
        let month = self.month as i32;
        let n1 = 275 * month / 9;
        let n2 = (month + 9) / 12;
        let n3 = 1 + (self.year.rem_euclid(4) + 2) / 3;
        n1 - n2 * n3 + self.day as i32 - 30
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Proleptic Gregorian leap-year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; 0 for a month outside 1-12.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
