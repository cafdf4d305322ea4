//! Composition of rise, noon and set times from the hour angle.

use crate::HoursUtc;

/// Degrees of earth rotation per hour.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Minutes per hour.
const MINUTES_PER_HOUR: f64 = 60.0;

/// Solar noon and the half-arc around it, in hours UTC of the calculation date.
///
/// Rise and set are kept as `noon ∓ half_arc` rather than stored directly so
/// callers converting to clock types can convert each part once and keep
/// `set - rise == 2 * half_arc` exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventTimes {
    noon: f64,
    half_arc: f64,
}

impl EventTimes {
    /// Gets solar noon (transit) as hours since 0 UT.
    #[must_use]
    pub const fn noon(&self) -> HoursUtc {
        HoursUtc::from_hours(self.noon)
    }

    /// Gets the half-arc (hour angle converted to hours).
    #[must_use]
    pub const fn half_arc_hours(&self) -> f64 {
        self.half_arc
    }

    /// Gets the rise as hours since 0 UT; negative values fall on the previous UTC day.
    #[must_use]
    pub fn rise(&self) -> HoursUtc {
        HoursUtc::from_hours(self.noon - self.half_arc)
    }

    /// Gets the set as hours since 0 UT; values of 24 or more fall on the next UTC day.
    #[must_use]
    pub fn set(&self) -> HoursUtc {
        HoursUtc::from_hours(self.noon + self.half_arc)
    }
}

/// Combines solar noon and the hour angle into event times.
///
/// # Arguments
/// * `longitude` - Observer longitude in degrees, east positive
/// * `equation_of_time` - Equation of time in minutes
/// * `hour_angle` - Hour angle in degrees (0 to 180)
///
/// # Example
/// ```
/// # use sunrise_calc::events::compose;
/// // Greenwich, no equation of time, 90° hour angle: 06:00 to 18:00 UTC
/// let times = compose(0.0, 0.0, 90.0);
/// assert_eq!(times.rise().hours(), 6.0);
/// assert_eq!(times.set().hours(), 18.0);
/// ```
#[must_use]
pub fn compose(longitude: f64, equation_of_time: f64, hour_angle: f64) -> EventTimes {
    let noon = 12.0 - longitude / DEGREES_PER_HOUR - equation_of_time / MINUTES_PER_HOUR;
    EventTimes {
        noon,
        half_arc: hour_angle / DEGREES_PER_HOUR,
    }
}
