//! Diurnal classification and the chrono-free rise/set pipeline.

use crate::ephemeris::SolarEphemeris;
use crate::error::check_coordinates;
use crate::events::{EventTimes, compose};
use crate::hour_angle::{self, HourAngle};
use crate::{DiurnalResult, Horizon, HoursUtc, Result, RiseAndSet};

/// Maps an hour-angle outcome to the public tri-state result.
#[must_use]
pub const fn classify(hour_angle: &HourAngle) -> DiurnalResult {
    match hour_angle {
        HourAngle::Crossing(_) => DiurnalResult::NormalDay,
        HourAngle::AlwaysAbove => DiurnalResult::SunAlwaysAbove,
        HourAngle::AlwaysBelow => DiurnalResult::SunAlwaysBelow,
    }
}

/// Runs the full pipeline for an already-computed ephemeris.
///
/// Coordinates are not validated here.
#[must_use]
pub fn solve_day(
    ephemeris: &SolarEphemeris,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> (DiurnalResult, EventTimes) {
    let hour_angle = hour_angle::solve(
        latitude,
        ephemeris.declination(),
        horizon.elevation_angle(),
    );
    let times = compose(
        longitude,
        ephemeris.equation_of_time(),
        hour_angle.degrees(),
    );
    (classify(&hour_angle), times)
}

/// Calculates rise, solar noon and set without chrono.
///
/// Returns times as hours since midnight UTC of the given date. Rise can be
/// negative (previous UTC day) and set can exceed 24 (next UTC day).
///
/// # Arguments
/// * `year` - Year (proleptic Gregorian)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `horizon` - Horizon definition
///
/// # Errors
/// Returns error for invalid date components or coordinates.
///
/// # Example
/// ```
/// use sunrise_calc::{diurnal, DiurnalResult, Horizon};
///
/// let times = diurnal::rise_and_set_hours(2021, 7, 8, 40.7128, -74.0060, Horizon::Normal).unwrap();
/// assert_eq!(times.result(), DiurnalResult::NormalDay);
///
/// // 05:32 EDT is 09:32 UTC
/// assert!((times.rise().hours() - 9.55).abs() < 0.05);
/// ```
pub fn rise_and_set_hours(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<RiseAndSet<HoursUtc>> {
    check_coordinates(latitude, longitude)?;
    let ephemeris = SolarEphemeris::for_date(year, month, day)?;

    let (result, times) = solve_day(&ephemeris, latitude, longitude, horizon);
    Ok(RiseAndSet::new(
        result,
        times.rise(),
        times.noon(),
        times.set(),
    ))
}
