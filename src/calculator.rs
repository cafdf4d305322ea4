//! Sunrise/sunset calculator bound to a location and calendar day.
//!
//! The calculator holds validated coordinates and a date; every query runs
//! the numeric pipeline for that date and converts the result to chrono
//! instants. Rise and set are derived from solar noon and the half-arc, each
//! converted to a [`TimeDelta`] once, so `set - rise` equals the reported day
//! length to the millisecond.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

use crate::diurnal::solve_day;
use crate::ephemeris::SolarEphemeris;
use crate::error::{check_latitude, check_longitude};
use crate::math::round;
use crate::{Horizon, Result, RiseAndSet, SolarEvent};

#[cfg(feature = "tz")]
use crate::zone::OutputZone;
#[cfg(feature = "tz")]
use chrono_tz::Tz;

const MILLISECONDS_PER_HOUR: f64 = 3_600_000.0;

/// Rise, set and twilight calculator for one location and one day.
///
/// # Example
/// ```
/// # #[cfg(feature = "tz")] {
/// # use sunrise_calc::{Horizon, DiurnalResult, SolarCalculator, OutputZone};
/// # use chrono::{NaiveDate, Timelike};
/// let day = NaiveDate::from_ymd_opt(2021, 7, 8).unwrap();
/// let nyc = SolarCalculator::new(40.7128, -74.0060, day).unwrap();
///
/// let eastern = OutputZone::named("America/New_York").unwrap();
/// let sunrise = nyc.sunrise_in(Horizon::Normal, &eastern);
/// assert_eq!(sunrise.result(), DiurnalResult::NormalDay);
/// assert_eq!(sunrise.instant().hour(), 5);
/// assert_eq!(sunrise.instant().minute(), 32);
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCalculator {
    latitude: f64,
    longitude: f64,
    day: NaiveDate,
}

impl SolarCalculator {
    /// Northernmost accepted latitude.
    pub const MAX_LATITUDE: f64 = 90.0;
    /// Southernmost accepted latitude.
    pub const MIN_LATITUDE: f64 = -90.0;
    /// Easternmost accepted longitude.
    pub const MAX_LONGITUDE: f64 = 180.0;
    /// Westernmost accepted longitude.
    pub const MIN_LONGITUDE: f64 = -180.0;

    /// Creates a calculator for the given coordinates and calendar day.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or
    /// non-finite coordinates.
    pub fn new(latitude: f64, longitude: f64, day: NaiveDate) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
            day,
        })
    }

    /// Creates a calculator for today's date in the system's local zone.
    ///
    /// # Errors
    /// Returns an error for invalid coordinates.
    #[cfg(feature = "std")]
    pub fn today(latitude: f64, longitude: f64) -> Result<Self> {
        Self::new(latitude, longitude, chrono::Local::now().date_naive())
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees, east positive.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the calendar day of the calculation.
    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        self.day
    }

    /// Replaces the latitude. On error the calculator is left unchanged.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` for out-of-range or non-finite values.
    pub fn set_latitude(&mut self, latitude: f64) -> Result<()> {
        check_latitude(latitude)?;
        self.latitude = latitude;
        Ok(())
    }

    /// Replaces the longitude. On error the calculator is left unchanged.
    ///
    /// # Errors
    /// Returns `InvalidLongitude` for out-of-range or non-finite values.
    pub fn set_longitude(&mut self, longitude: f64) -> Result<()> {
        check_longitude(longitude)?;
        self.longitude = longitude;
        Ok(())
    }

    /// Replaces the calendar day.
    pub fn set_day(&mut self, day: NaiveDate) {
        self.day = day;
    }

    /// Returns a copy with a different latitude.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` for out-of-range or non-finite values.
    pub fn with_latitude(mut self, latitude: f64) -> Result<Self> {
        self.set_latitude(latitude)?;
        Ok(self)
    }

    /// Returns a copy with a different longitude.
    ///
    /// # Errors
    /// Returns `InvalidLongitude` for out-of-range or non-finite values.
    pub fn with_longitude(mut self, longitude: f64) -> Result<Self> {
        self.set_longitude(longitude)?;
        Ok(self)
    }

    /// Returns a copy for a different calendar day.
    #[must_use]
    pub const fn with_day(mut self, day: NaiveDate) -> Self {
        self.day = day;
        self
    }

    /// Gets the solar ephemeris (declination, equation of time) for the day.
    #[must_use]
    pub fn ephemeris(&self) -> SolarEphemeris {
        SolarEphemeris::for_naive_date(self.day)
    }

    /// Calculates rise, solar noon and set in UTC.
    ///
    /// Rise may fall on the previous UTC day and set on the next one. For
    /// polar results the instants are extrapolated; see [`RiseAndSet`].
    ///
    /// # Panics
    /// Panics if an instant falls outside chrono's representable range, which
    /// only happens within a day of `NaiveDate::MIN` or `NaiveDate::MAX`.
    #[must_use]
    pub fn rise_and_set(&self, horizon: Horizon) -> RiseAndSet<DateTime<Utc>> {
        let (result, times) = solve_day(&self.ephemeris(), self.latitude, self.longitude, horizon);

        let midnight = self.day.and_time(NaiveTime::MIN).and_utc();
        let noon = midnight + hours_to_delta(times.noon().hours());
        let half_arc = hours_to_delta(times.half_arc_hours());

        RiseAndSet::new(result, noon - half_arc, noon, noon + half_arc)
    }

    /// Calculates the rise for the given horizon in UTC.
    #[must_use]
    pub fn sunrise(&self, horizon: Horizon) -> SolarEvent<DateTime<Utc>> {
        self.rise_and_set(horizon).sunrise()
    }

    /// Calculates the set for the given horizon in UTC.
    #[must_use]
    pub fn sunset(&self, horizon: Horizon) -> SolarEvent<DateTime<Utc>> {
        self.rise_and_set(horizon).sunset()
    }

    /// Calculates solar noon (the sun's transit) in UTC.
    #[must_use]
    pub fn solar_noon(&self) -> DateTime<Utc> {
        *self.rise_and_set(Horizon::Normal).noon()
    }

    /// Calculates the time between sunrise and sunset for [`Horizon::Normal`].
    ///
    /// Polar day reports 24 hours and polar night zero.
    #[must_use]
    pub fn day_length(&self) -> TimeDelta {
        let times = self.rise_and_set(Horizon::Normal);
        *times.set() - *times.rise()
    }

    /// Calculates rise, solar noon and set projected into `zone`.
    #[cfg(feature = "tz")]
    #[must_use]
    pub fn rise_and_set_in(&self, horizon: Horizon, zone: &OutputZone) -> RiseAndSet<DateTime<Tz>> {
        self.rise_and_set(horizon).map(|instant| zone.project(instant))
    }

    /// Calculates the rise for the given horizon projected into `zone`.
    #[cfg(feature = "tz")]
    #[must_use]
    pub fn sunrise_in(&self, horizon: Horizon, zone: &OutputZone) -> SolarEvent<DateTime<Tz>> {
        self.rise_and_set_in(horizon, zone).sunrise()
    }

    /// Calculates the set for the given horizon projected into `zone`.
    #[cfg(feature = "tz")]
    #[must_use]
    pub fn sunset_in(&self, horizon: Horizon, zone: &OutputZone) -> SolarEvent<DateTime<Tz>> {
        self.rise_and_set_in(horizon, zone).sunset()
    }
}

/// Converts fractional hours to a duration rounded to the millisecond.
fn hours_to_delta(hours: f64) -> TimeDelta {
    TimeDelta::milliseconds(round(hours * MILLISECONDS_PER_HOUR) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiurnalResult, Error};
    use chrono::{Datelike, Duration, TimeZone};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_new_validates_coordinates() {
        let day = date(2021, 6, 21);
        assert!(SolarCalculator::new(90.0, 180.0, day).is_ok());
        assert!(SolarCalculator::new(-90.0, -180.0, day).is_ok());
        assert_eq!(
            SolarCalculator::new(90.5, 0.0, day).unwrap_err(),
            Error::invalid_latitude(90.5)
        );
        assert_eq!(
            SolarCalculator::new(0.0, -180.5, day).unwrap_err(),
            Error::invalid_longitude(-180.5)
        );
        assert!(SolarCalculator::new(f64::NAN, 0.0, day).is_err());
    }

    #[test]
    fn test_failed_setter_leaves_state_unchanged() {
        let mut calc = SolarCalculator::new(10.0, 20.0, date(2021, 6, 21)).unwrap();
        assert!(calc.set_latitude(100.0).is_err());
        assert!(calc.set_longitude(f64::INFINITY).is_err());
        assert_eq!(calc.latitude(), 10.0);
        assert_eq!(calc.longitude(), 20.0);

        calc.set_latitude(-33.0).unwrap();
        calc.set_longitude(151.0).unwrap();
        calc.set_day(date(2022, 1, 1));
        assert_eq!(calc.latitude(), -33.0);
        assert_eq!(calc.longitude(), 151.0);
        assert_eq!(calc.day(), date(2022, 1, 1));
    }

    #[test]
    fn test_builders_copy() {
        let base = SolarCalculator::new(0.0, 0.0, date(2021, 1, 1)).unwrap();
        let moved = base
            .with_latitude(50.0)
            .unwrap()
            .with_longitude(14.0)
            .unwrap()
            .with_day(date(2021, 2, 1));
        assert_eq!(base.latitude(), 0.0);
        assert_eq!(moved.latitude(), 50.0);
        assert_eq!(moved.longitude(), 14.0);
        assert_eq!(moved.day().month(), 2);
        assert!(base.with_longitude(200.0).is_err());
    }

    #[test]
    fn test_greenwich_solstices() {
        let calc = SolarCalculator::new(51.4769, 0.0, date(2021, 6, 21)).unwrap();
        let times = calc.rise_and_set(Horizon::Normal);
        let expected_rise = Utc.with_ymd_and_hms(2021, 6, 21, 3, 42, 51).unwrap();
        let expected_set = Utc.with_ymd_and_hms(2021, 6, 21, 20, 20, 51).unwrap();
        assert!((*times.rise() - expected_rise).abs() < Duration::seconds(60));
        assert!((*times.set() - expected_set).abs() < Duration::seconds(60));

        let winter = calc.with_day(date(2021, 12, 21)).rise_and_set(Horizon::Normal);
        let expected_rise = Utc.with_ymd_and_hms(2021, 12, 21, 8, 3, 17).unwrap();
        let expected_set = Utc.with_ymd_and_hms(2021, 12, 21, 15, 53, 6).unwrap();
        assert!((*winter.rise() - expected_rise).abs() < Duration::seconds(60));
        assert!((*winter.set() - expected_set).abs() < Duration::seconds(60));
    }

    #[test]
    fn test_sunrise_matches_rise_and_set() {
        let calc = SolarCalculator::new(49.8209, 18.2625, date(2021, 3, 1)).unwrap();
        for horizon in Horizon::ALL {
            let times = calc.rise_and_set(horizon);
            assert_eq!(calc.sunrise(horizon), times.sunrise());
            assert_eq!(calc.sunset(horizon), times.sunset());
        }
    }

    #[test]
    fn test_day_length_is_set_minus_rise() {
        let calc = SolarCalculator::new(40.7128, -74.0060, date(2021, 7, 8)).unwrap();
        let times = calc.rise_and_set(Horizon::Normal);
        assert_eq!(calc.day_length(), *times.set() - *times.rise());
        assert_eq!(calc.solar_noon(), *times.noon());
        // about 14h56m
        assert!((calc.day_length() - Duration::minutes(14 * 60 + 56)).abs() < Duration::minutes(2));
    }

    #[test]
    fn test_polar_day_lengths() {
        let north = SolarCalculator::new(85.0, 0.0, date(2021, 6, 21)).unwrap();
        assert_eq!(north.rise_and_set(Horizon::Normal).result(), DiurnalResult::SunAlwaysAbove);
        assert_eq!(north.day_length(), Duration::hours(24));

        let south = north.with_latitude(-85.0).unwrap();
        assert_eq!(south.rise_and_set(Horizon::Normal).result(), DiurnalResult::SunAlwaysBelow);
        assert_eq!(south.day_length(), Duration::zero());
        assert_eq!(*south.sunrise(Horizon::Normal).instant(), south.solar_noon());
    }

    #[test]
    fn test_polar_rises_twelve_hours_apart() {
        let north = SolarCalculator::new(80.0, 0.0, date(2021, 6, 21)).unwrap();
        let south = north.with_latitude(-80.0).unwrap();
        let north_rise = *north.sunrise(Horizon::Normal).instant();
        let south_rise = *south.sunrise(Horizon::Normal).instant();
        assert_eq!(south_rise - north_rise, Duration::hours(12));
    }

    #[test]
    fn test_far_east_rise_on_previous_utc_day() {
        let tokyo = SolarCalculator::new(35.6762, 139.6503, date(2021, 6, 21)).unwrap();
        let rise = *tokyo.sunrise(Horizon::Normal).instant();
        assert_eq!(rise.date_naive(), date(2021, 6, 20));
        let set = *tokyo.sunset(Horizon::Normal).instant();
        assert_eq!(set.date_naive(), date(2021, 6, 21));
    }

    #[test]
    fn test_hours_to_delta_rounds_to_millisecond() {
        assert_eq!(hours_to_delta(12.0), Duration::hours(12));
        assert_eq!(hours_to_delta(-0.5), Duration::minutes(-30));
        assert_eq!(hours_to_delta(1.0 / 3_600_000.0 * 0.6), Duration::milliseconds(1));
    }

    #[test]
    #[cfg(feature = "tz")]
    fn test_zone_projection_preserves_instants() {
        let calc = SolarCalculator::new(40.7128, -74.0060, date(2021, 7, 8)).unwrap();
        let zone = OutputZone::named("America/New_York").unwrap();
        let utc = calc.rise_and_set(Horizon::Civil);
        let local = calc.rise_and_set_in(Horizon::Civil, &zone);
        assert_eq!(local.result(), utc.result());
        assert_eq!(local.rise().with_timezone(&Utc), *utc.rise());
        assert_eq!(local.set().with_timezone(&Utc), *utc.set());
        assert_eq!(
            calc.sunset_in(Horizon::Civil, &zone).instant().with_timezone(&Utc),
            *utc.set()
        );
    }
}
