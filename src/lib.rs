//! # Sunrise Calculator
//!
//! Sunrise, sunset, solar noon and twilight times for any point on earth and
//! any calendar day, with explicit classification of polar day and polar night.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The sun's declination and the equation of time come from the NOAA/Meeus
//! low-precision ephemeris, evaluated once per day at 12:00 UT. From these the
//! library solves the hour angle at which the sun's centre reaches the chosen
//! horizon and places rise and set symmetrically around solar noon.
//!
//! Where the sun never crosses the horizon, results are still returned: the
//! hour angle is clamped to 180° (sun always above, 24 hours of daylight) or
//! 0° (sun always below, rise and set both at solar noon), and the
//! [`DiurnalResult`] says which.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions and enable [`SolarCalculator::today`]
//! - `chrono` (default): Enable the [`SolarCalculator`] facade returning `DateTime<Utc>`
//! - `tz` (default): Enable [`OutputZone`] and the `*_in` methods projecting into IANA zones via `chrono-tz`
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono + tz
//! sunrise-calc = "0.1"
//!
//! # UTC only, no time zone database
//! sunrise-calc = { version = "0.1", default-features = false, features = ["std", "chrono"] }
//!
//! # Minimal no_std (pure numeric API)
//! sunrise-calc = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Calculator (with chrono)
//! ```rust
//! # #[cfg(feature = "tz")] {
//! use sunrise_calc::{Horizon, OutputZone, SolarCalculator};
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2021, 7, 8).unwrap();
//! let nyc = SolarCalculator::new(40.7128, -74.0060, day).unwrap();
//! let eastern = OutputZone::named("America/New_York").unwrap();
//!
//! for horizon in Horizon::ALL {
//!     let times = nyc.rise_and_set_in(horizon, &eastern);
//!     println!("{horizon:?}: {} - {} ({:?})", times.rise(), times.set(), times.result());
//! }
//! println!("Day length: {}", nyc.day_length());
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use sunrise_calc::{diurnal, Horizon};
//!
//! let times = diurnal::rise_and_set_hours(2021, 6, 21, 78.22, 15.65, Horizon::Normal).unwrap();
//! assert!(times.result().is_polar());
//!
//! let (day_offset, hours) = times.rise().day_and_hours();
//! println!("Extrapolated rise: day {day_offset}, {hours:.3} h UTC");
//! ```
//!
//! ## References
//!
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd edition. Willmann-Bell.
//! - NOAA Global Monitoring Laboratory, Solar Calculator.
//!   <https://gml.noaa.gov/grad/solcalc/>

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of clamped hour angles in tests
)]

#[cfg(feature = "tz")]
extern crate alloc;

// Public API exports
#[cfg(feature = "chrono")]
pub use crate::calculator::SolarCalculator;
pub use crate::error::{Error, Result};
pub use crate::types::{DiurnalResult, Horizon, HoursUtc, RiseAndSet, SolarEvent};
#[cfg(feature = "tz")]
pub use crate::zone::OutputZone;

// Core modules
pub mod error;
pub mod types;

// Pipeline stages
pub mod diurnal;
pub mod ephemeris;
pub mod events;
pub mod hour_angle;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(feature = "chrono")]
mod calculator;
#[cfg(feature = "tz")]
mod zone;
