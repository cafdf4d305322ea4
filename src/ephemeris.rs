//! Low-precision solar ephemeris.
//!
//! Follows the NOAA solar calculator, itself based on Meeus, "Astronomical
//! Algorithms", 2nd edition, chapters 25 and 28. Declination is good to about
//! 0.01° and the equation of time to a few seconds for years 1800-2100,
//! degrading slowly outside that range.
//!
//! The sun's position is evaluated once per calendar day, at 12:00 UT.

#![allow(clippy::unreadable_literal)]

use crate::Result;
use crate::math::{
    asin, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial, radians_to_degrees,
    sin, tan,
};
use crate::time::{JulianDate, day_of_year};

/// Minutes of time per degree of rotation (1440 min / 360°).
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Solar quantities for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEphemeris {
    day_of_year: u32,
    declination: f64,
    equation_of_time: f64,
}

impl SolarEphemeris {
    /// Computes the ephemeris for a calendar date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the components do not form a Gregorian date.
    ///
    /// # Example
    /// ```
    /// # use sunrise_calc::ephemeris::SolarEphemeris;
    /// let solstice = SolarEphemeris::for_date(2021, 6, 21).unwrap();
    /// assert_eq!(solstice.day_of_year(), 172);
    /// assert!((solstice.declination() - 23.44).abs() < 0.05);
    /// ```
    pub fn for_date(year: i32, month: u32, day: u32) -> Result<Self> {
        let day_of_year = day_of_year(year, month, day)?;
        let noon = JulianDate::from_date(year, month, day)?.add_days(0.5);
        let (declination, equation_of_time) = declination_and_equation_of_time(noon);

        Ok(Self {
            day_of_year,
            declination,
            equation_of_time,
        })
    }

    /// Computes the ephemeris for a chrono date.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn for_naive_date(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;

        let noon = JulianDate::from_julian_date(
            f64::from(date.num_days_from_ce()) + CE_DAY_TO_JULIAN_NOON,
        );
        let (declination, equation_of_time) = declination_and_equation_of_time(noon);

        Self {
            day_of_year: date.ordinal(),
            declination,
            equation_of_time,
        }
    }

    /// Gets the day of the year (1-366).
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Gets the sun's declination in degrees, positive north.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the equation of time in minutes (apparent minus mean solar time).
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }
}

/// Offset from chrono's `num_days_from_ce()` (1 for 0001-01-01) to the Julian
/// date of 12:00 UT on the same day.
#[cfg(feature = "chrono")]
const CE_DAY_TO_JULIAN_NOON: f64 = 1_721_425.0;

/// Declination (degrees) and equation of time (minutes) at the given instant.
fn declination_and_equation_of_time(jd: JulianDate) -> (f64, f64) {
    let t = jd.julian_century();

    // Geometric mean longitude and mean anomaly of the sun
    let l0 = normalize_degrees_0_to_360(polynomial(&[280.46646, 36000.76983, 0.0003032], t));
    let m = polynomial(&[357.52911, 35999.05029, -0.0001537], t);
    let e = polynomial(&[0.016708634, -0.000042037, -0.0000001267], t);

    let m_rad = degrees_to_radians(m);

    // Equation of centre
    let c = sin(m_rad) * polynomial(&[1.914602, -0.004817, -0.000014], t)
        + sin(2.0 * m_rad) * polynomial(&[0.019993, -0.000101], t)
        + sin(3.0 * m_rad) * 0.000289;

    let true_longitude = l0 + c;

    // Apparent longitude, corrected for nutation and aberration
    let omega = degrees_to_radians(125.04 - 1934.136 * t);
    let lambda = degrees_to_radians(true_longitude - 0.00569 - 0.00478 * sin(omega));

    // Obliquity of the ecliptic
    let mean_obliquity = 23.0
        + (26.0 + polynomial(&[21.448, -46.815, -0.00059, 0.001813], t) / 60.0) / 60.0;
    let epsilon = degrees_to_radians(mean_obliquity + 0.00256 * cos(omega));

    let declination = radians_to_degrees(asin(sin(epsilon) * sin(lambda)));

    let y = tan(epsilon / 2.0) * tan(epsilon / 2.0);
    let l0_rad = degrees_to_radians(l0);
    let equation_of_time = MINUTES_PER_DEGREE
        * radians_to_degrees(
            y * sin(2.0 * l0_rad) - 2.0 * e * sin(m_rad)
                + 4.0 * e * y * sin(m_rad) * cos(2.0 * l0_rad)
                - 0.5 * y * y * sin(4.0 * l0_rad)
                - 1.25 * e * e * sin(2.0 * m_rad),
        );

    (declination, equation_of_time)
}
