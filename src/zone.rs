//! Output time zone for projected event instants.
//!
//! All astronomy runs in UTC; a zone only changes how the finished instants
//! are presented. Zone rules come from the IANA database compiled into
//! `chrono-tz`.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::{Error, Result};

/// Zone in which calculator results are expressed.
///
/// # Example
/// ```
/// # use sunrise_calc::OutputZone;
/// let eastern: OutputZone = "America/New_York".parse().unwrap();
/// assert!(matches!(eastern, OutputZone::Named(_)));
///
/// assert!(OutputZone::named("Atlantis/Capital").is_err());
/// assert_eq!(OutputZone::default(), OutputZone::Utc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputZone {
    /// No projection; instants stay in UTC.
    #[default]
    Utc,
    /// Project into a named IANA zone (offset and daylight saving applied).
    Named(Tz),
}

impl OutputZone {
    /// Looks up a zone by IANA identifier, such as `"Europe/Prague"`.
    ///
    /// # Errors
    /// Returns `TimezoneLookup` if the identifier is not in the database.
    pub fn named(identifier: &str) -> Result<Self> {
        identifier
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| Error::timezone_lookup(identifier))
    }

    /// Gets the zone used for projection; UTC when no zone was chosen.
    #[must_use]
    pub const fn tz(&self) -> Tz {
        match self {
            Self::Utc => Tz::UTC,
            Self::Named(tz) => *tz,
        }
    }

    /// Projects a UTC instant into this zone.
    #[must_use]
    pub fn project(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz())
    }
}

impl FromStr for OutputZone {
    type Err = Error;

    fn from_str(identifier: &str) -> Result<Self> {
        Self::named(identifier)
    }
}

impl From<Tz> for OutputZone {
    fn from(tz: Tz) -> Self {
        Self::Named(tz)
    }
}
