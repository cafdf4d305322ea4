//! Core data types shared by the numeric pipeline and the calculator.

use crate::math::floor;

/// Predefined horizons for rise/set and twilight calculations.
///
/// Each horizon is bound to a fixed solar elevation angle; negative values
/// mean the sun's centre is below the geometric horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Horizon {
    /// Standard sunrise/sunset (sun's upper limb touches horizon, accounting for refraction)
    #[default]
    Normal,
    /// Civil twilight (sun is 6° below horizon)
    Civil,
    /// Nautical twilight (sun is 12° below horizon)
    Nautical,
    /// Astronomical twilight (sun is 18° below horizon)
    Astronomical,
}

impl Horizon {
    /// All horizons, from the shallowest to the deepest depression.
    pub const ALL: [Self; 4] = [
        Self::Normal,
        Self::Civil,
        Self::Nautical,
        Self::Astronomical,
    ];

    /// Gets the solar elevation angle in degrees for this horizon definition.
    ///
    /// # Example
    /// ```
    /// # use sunrise_calc::Horizon;
    /// assert_eq!(Horizon::Civil.elevation_angle(), -6.0);
    /// ```
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::Normal => -0.833, // Refraction plus solar semi-diameter
            Self::Civil => -6.0,
            Self::Nautical => -12.0,
            Self::Astronomical => -18.0,
        }
    }
}

/// Outcome of a rise/set calculation for one horizon and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiurnalResult {
    /// The sun crosses the horizon; rise and set are true events.
    NormalDay,
    /// The sun stays above the horizon all day (polar day for this horizon).
    SunAlwaysAbove,
    /// The sun stays below the horizon all day (polar night for this horizon).
    SunAlwaysBelow,
}

impl DiurnalResult {
    /// Checks if rise and set are genuine horizon crossings.
    #[must_use]
    pub const fn is_normal_day(&self) -> bool {
        matches!(self, Self::NormalDay)
    }

    /// Checks if this is a polar day or polar night.
    #[must_use]
    pub const fn is_polar(&self) -> bool {
        !self.is_normal_day()
    }
}

/// Hours since midnight UTC that can extend beyond a single day.
///
/// Values represent hours since 0 UT of the calculation date:
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// # Example
/// ```
/// # use sunrise_calc::HoursUtc;
/// let morning = HoursUtc::from_hours(6.5); // 06:30 current day
/// let after_midnight = HoursUtc::from_hours(24.5); // 00:30 next day
/// let before_midnight_prev = HoursUtc::from_hours(-0.5); // 23:30 previous day
/// assert_eq!(after_midnight.day_and_hours().0, 1);
/// assert_eq!(before_midnight_prev.day_and_hours().0, -1);
/// assert_eq!(morning.day_and_hours(), (0, 6.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Returns
    /// Tuple of (`day_offset`, `hours_in_day`) where:
    /// - `day_offset`: whole days offset from the calculation date
    /// - `hours_in_day`: 0.0 to < 24.0
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }
}

/// A single rise or set instant together with the day's classification.
///
/// For polar results the instant is extrapolated, not a true crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarEvent<T> {
    result: DiurnalResult,
    instant: T,
}

impl<T> SolarEvent<T> {
    /// Creates a new event.
    pub const fn new(result: DiurnalResult, instant: T) -> Self {
        Self { result, instant }
    }

    /// Gets the classification of the day.
    pub const fn result(&self) -> DiurnalResult {
        self.result
    }

    /// Gets the event instant.
    pub const fn instant(&self) -> &T {
        &self.instant
    }

    /// Gets the instant only if it is a true horizon crossing.
    pub const fn crossing(&self) -> Option<&T> {
        if self.result.is_normal_day() {
            Some(&self.instant)
        } else {
            None
        }
    }

    /// Splits the event into classification and instant.
    pub fn into_parts(self) -> (DiurnalResult, T) {
        (self.result, self.instant)
    }
}

/// Rise, set and solar noon for one horizon and day.
///
/// Rise and set are always present. When [`result`](Self::result) is polar,
/// they are extrapolated from the clamped hour angle: 12 hours either side of
/// noon for [`DiurnalResult::SunAlwaysAbove`], both equal to noon for
/// [`DiurnalResult::SunAlwaysBelow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiseAndSet<T> {
    result: DiurnalResult,
    rise: T,
    noon: T,
    set: T,
}

impl<T> RiseAndSet<T> {
    /// Creates a new rise/set record.
    pub const fn new(result: DiurnalResult, rise: T, noon: T, set: T) -> Self {
        Self {
            result,
            rise,
            noon,
            set,
        }
    }

    /// Gets the classification of the day.
    pub const fn result(&self) -> DiurnalResult {
        self.result
    }

    /// Gets the rise instant.
    pub const fn rise(&self) -> &T {
        &self.rise
    }

    /// Gets the solar noon (transit) instant.
    pub const fn noon(&self) -> &T {
        &self.noon
    }

    /// Gets the set instant.
    pub const fn set(&self) -> &T {
        &self.set
    }

    /// Applies `f` to every instant, keeping the classification.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> RiseAndSet<U> {
        RiseAndSet {
            result: self.result,
            rise: f(self.rise),
            noon: f(self.noon),
            set: f(self.set),
        }
    }
}

impl<T: Clone> RiseAndSet<T> {
    /// Extracts the rise as a standalone event.
    pub fn sunrise(&self) -> SolarEvent<T> {
        SolarEvent::new(self.result, self.rise.clone())
    }

    /// Extracts the set as a standalone event.
    pub fn sunset(&self) -> SolarEvent<T> {
        SolarEvent::new(self.result, self.set.clone())
    }
}
