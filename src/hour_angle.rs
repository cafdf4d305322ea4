//! Hour angle of the horizon crossing.
//!
//! The hour angle is half the diurnal arc: the angle the earth turns between
//! sunrise and solar noon. Where the sun never crosses the requested horizon,
//! the `acos` argument leaves [-1, 1]; the solver clamps it to the nearest
//! boundary and flags the polar condition instead of producing NaN.

use crate::math::{acos, cos, degrees_to_radians, radians_to_degrees, sin};

/// Result of solving for the hour angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HourAngle {
    /// The sun crosses the horizon; half the diurnal arc in degrees (0 to 180).
    Crossing(f64),
    /// The sun stays above the horizon; extrapolated to 180°.
    AlwaysAbove,
    /// The sun never reaches the horizon; extrapolated to 0°.
    AlwaysBelow,
}

impl HourAngle {
    /// Gets the hour angle in degrees, extrapolated to the domain boundary for polar cases.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Crossing(degrees) => *degrees,
            Self::AlwaysAbove => 180.0,
            Self::AlwaysBelow => 0.0,
        }
    }
}

/// Solves for the hour angle at which the sun's centre is at `elevation_angle`.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `declination` - Solar declination in degrees
/// * `elevation_angle` - Horizon elevation angle in degrees (negative below the horizon)
///
/// # Example
/// ```
/// # use sunrise_calc::hour_angle::{solve, HourAngle};
/// // Equator at equinox: 12 hours of geometric daylight
/// assert!((solve(0.0, 0.0, 0.0).degrees() - 90.0).abs() < 1e-9);
///
/// // Far north at the June solstice
/// assert_eq!(solve(85.0, 23.44, -0.833), HourAngle::AlwaysAbove);
/// ```
#[must_use]
pub fn solve(latitude: f64, declination: f64, elevation_angle: f64) -> HourAngle {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let h0 = degrees_to_radians(elevation_angle);

    let numerator = sin(h0) - sin(phi) * sin(delta);
    let cos_h = numerator / (cos(phi) * cos(delta));

    if cos_h < -1.0 {
        HourAngle::AlwaysAbove
    } else if cos_h > 1.0 {
        HourAngle::AlwaysBelow
    } else if cos_h.is_nan() {
        // Zero denominator with zero numerator: the sun skims the horizon
        if numerator > 0.0 {
            HourAngle::AlwaysBelow
        } else {
            HourAngle::AlwaysAbove
        }
    } else {
        HourAngle::Crossing(radians_to_degrees(acos(cos_h)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLSTICE_DECLINATION: f64 = 23.44;

    #[test]
    fn test_equator_equinox_geometric_horizon() {
        let h = solve(0.0, 0.0, 0.0);
        assert!(matches!(h, HourAngle::Crossing(_)));
        assert!((h.degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_refraction_lengthens_day() {
        let geometric = solve(45.0, 10.0, 0.0).degrees();
        let refracted = solve(45.0, 10.0, -0.833).degrees();
        assert!(refracted > geometric);
    }

    #[test]
    fn test_polar_conditions() {
        assert_eq!(
            solve(85.0, SOLSTICE_DECLINATION, -0.833),
            HourAngle::AlwaysAbove
        );
        assert_eq!(
            solve(-85.0, SOLSTICE_DECLINATION, -0.833),
            HourAngle::AlwaysBelow
        );
        assert_eq!(
            solve(85.0, -SOLSTICE_DECLINATION, -0.833),
            HourAngle::AlwaysBelow
        );
        assert_eq!(
            solve(-85.0, -SOLSTICE_DECLINATION, -0.833),
            HourAngle::AlwaysAbove
        );
    }

    #[test]
    fn test_clamped_degrees() {
        assert_eq!(HourAngle::AlwaysAbove.degrees(), 180.0);
        assert_eq!(HourAngle::AlwaysBelow.degrees(), 0.0);
        assert_eq!(HourAngle::Crossing(42.5).degrees(), 42.5);
    }

    #[test]
    fn test_deeper_horizon_widens_arc() {
        let arcs = [-0.833, -6.0, -12.0, -18.0].map(|angle| solve(49.82, 15.0, angle).degrees());
        for pair in arcs.windows(2) {
            assert!(pair[1] > pair[0], "{arcs:?}");
        }
    }

    #[test]
    fn test_twilight_polar_threshold() {
        // Civil twilight lasts all night above 90 - 23.44 - 6 = 60.56° at the June solstice
        assert_eq!(solve(61.0, SOLSTICE_DECLINATION, -6.0), HourAngle::AlwaysAbove);
        assert!(matches!(
            solve(60.0, SOLSTICE_DECLINATION, -6.0),
            HourAngle::Crossing(_)
        ));
    }

    #[test]
    fn test_poles_never_produce_nan() {
        for latitude in [-90.0, 90.0] {
            for declination in [-23.44, -1.0, 0.0, 1.0, 23.44] {
                for angle in [-18.0, -0.833, 0.0] {
                    let h = solve(latitude, declination, angle).degrees();
                    assert!(h.is_finite(), "lat={latitude} dec={declination} angle={angle}");
                }
            }
        }
    }

    #[test]
    fn test_north_pole_follows_declination_sign() {
        assert_eq!(solve(90.0, 10.0, -0.833), HourAngle::AlwaysAbove);
        assert_eq!(solve(90.0, -10.0, -0.833), HourAngle::AlwaysBelow);
        assert_eq!(solve(-90.0, 10.0, -0.833), HourAngle::AlwaysBelow);
    }
}
