//! Calendar and Julian date helpers.
//!
//! All dates are interpreted in the proleptic Gregorian calendar, including
//! dates before the 1582 reform.

#![allow(clippy::many_single_char_names)]

use crate::math::floor;
use crate::{Error, Result};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Cumulative days before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Julian date of an instant on the UTC time scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Creates the Julian date of 0 UT on the given calendar date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the components do not form a Gregorian date.
    ///
    /// # Example
    /// ```
    /// # use sunrise_calc::time::JulianDate;
    /// let jd = JulianDate::from_date(2000, 1, 1).unwrap();
    /// assert_eq!(jd.julian_date(), 2_451_544.5);
    /// ```
    pub fn from_date(year: i32, month: u32, day: u32) -> Result<Self> {
        check_date(year, month, day)?;
        Ok(Self {
            jd: calculate_julian_date(year, month, day),
        })
    }

    /// Creates a Julian date from a raw day count.
    #[must_use]
    pub const fn from_julian_date(jd: f64) -> Self {
        Self { jd }
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Calculates the Julian Century (JC) from J2000.0.
    ///
    /// JC = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Returns this date shifted by a (possibly fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self { jd: self.jd + days }
    }
}

/// Julian Date of 0 UT, following Meeus, "Astronomical Algorithms", ch. 7,
/// with the Gregorian correction applied unconditionally.
fn calculate_julian_date(year: i32, month: u32, day: u32) -> f64 {
    let mut y = f64::from(year);
    let mut m = f64::from(month);

    // January and February count as months 13 and 14 of the previous year
    if month < 3 {
        y -= 1.0;
        m += 12.0;
    }

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(day) + b - 1524.5
}

/// Checks whether `year` is a leap year in the proleptic Gregorian calendar.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month.
///
/// # Errors
/// Returns `InvalidDate` if month is outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => return Err(Error::invalid_date("month must be between 1 and 12")),
    };
    Ok(days)
}

/// Validates calendar components.
///
/// # Errors
/// Returns `InvalidDate` for a month outside 1-12 or a day outside the month.
pub fn check_date(year: i32, month: u32, day: u32) -> Result<()> {
    let last = days_in_month(year, month)?;
    if day == 0 || day > last {
        return Err(Error::invalid_date("day is out of range for month"));
    }
    Ok(())
}

/// Day of the year, 1 for January 1st up to 365 or 366.
///
/// # Errors
/// Returns `InvalidDate` if the components do not form a Gregorian date.
///
/// # Example
/// ```
/// # use sunrise_calc::time::day_of_year;
/// assert_eq!(day_of_year(2021, 7, 8).unwrap(), 189);
/// assert_eq!(day_of_year(2024, 12, 31).unwrap(), 366);
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    check_date(year, month, day)?;
    let leap_day = u32::from(month > 2 && is_leap_year(year));
    Ok(DAYS_BEFORE_MONTH[(month - 1) as usize] + day + leap_day)
}
