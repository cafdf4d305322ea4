//! Error types for sunrise/sunset calculations.
//!
//! Polar day and polar night are not errors; they are reported through
//! [`DiurnalResult`](crate::DiurnalResult).

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while configuring or running a calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Calendar components that do not form a proleptic Gregorian date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// The time zone identifier is not in the time zone database.
    #[cfg(feature = "tz")]
    TimezoneLookup {
        /// The identifier that could not be resolved.
        identifier: alloc::string::String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            #[cfg(feature = "tz")]
            Self::TimezoneLookup { identifier } => {
                write!(f, "unknown time zone identifier {identifier:?}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates a time zone lookup error for `identifier`.
    #[cfg(feature = "tz")]
    #[must_use]
    pub fn timezone_lookup(identifier: &str) -> Self {
        Self::TimezoneLookup {
            identifier: identifier.into(),
        }
    }

    /// Checks if this error was caused by an out-of-range coordinate.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::InvalidLatitude { .. } | Self::InvalidLongitude { .. }
        )
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees or not finite.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees or not finite.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(45.5).is_ok());

        assert!(check_latitude(90.000_001).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-180.5).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_check_coordinates_reports_first_failure() {
        assert_eq!(
            check_coordinates(95.0, 200.0),
            Err(Error::invalid_latitude(95.0))
        );
        assert_eq!(
            check_coordinates(45.0, 200.0),
            Err(Error::invalid_longitude(200.0))
        );
    }

    #[test]
    fn test_out_of_range_classification() {
        assert!(Error::invalid_latitude(91.0).is_out_of_range());
        assert!(Error::invalid_longitude(-181.0).is_out_of_range());
        assert!(!Error::invalid_date("month must be between 1 and 12").is_out_of_range());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_longitude(185.0);
        assert_eq!(
            err.to_string(),
            "invalid longitude 185° (must be between -180° and +180°)"
        );

        let err = Error::invalid_date("day is out of range for month");
        assert_eq!(err.to_string(), "invalid date: day is out of range for month");
    }

    #[test]
    #[cfg(all(feature = "std", feature = "tz"))]
    fn test_timezone_lookup_display() {
        let err = Error::timezone_lookup("Mars/Olympus_Mons");
        assert_eq!(
            err.to_string(),
            "unknown time zone identifier \"Mars/Olympus_Mons\""
        );
        assert!(!err.is_out_of_range());
    }
}
