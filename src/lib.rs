//! # Solar Almanac
//!
//! Sunrise, sunset and twilight times using the closed-form method of the U.S. Naval
//! Observatory's *Almanac for Computers* (1990).

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Given a calendar date, a location, a zenith angle and a fixed UTC offset, the calculator
//! returns the local clock time at which the sun crosses that zenith, or an explicit
//! "no event" signal for polar day and polar night. It is a single deterministic,
//! stateless computation with a handful of trigonometric calls, so it is cheap enough
//! for embedded use and safe to call from any number of threads.
//!
//! ## Features
//!
//! - Explicit results: [`EventTime::NoEvent`] instead of a NaN sentinel
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, native or `libm` math
//! - Diagnostics through the `log` facade (intermediate values at `trace`, polar cases at `debug`)
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable `NaiveDate`/`FixedOffset` convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! ```toml
//! # Default: std + chrono
//! solar-almanac = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! solar-almanac = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Numeric API
//! ```rust
//! use solar_almanac::{usno, EventTime, SolarEvent, Zenith};
//!
//! // Official sunrise in Beijing (UTC+8) on the June solstice
//! let sunrise = usno::event_time(
//!     2024, 6, 21,
//!     8.0,        // fixed UTC offset in hours
//!     39.9042,    // latitude
//!     116.4074,   // longitude (positive East)
//!     Zenith::OFFICIAL_DEGREES,
//!     SolarEvent::Sunrise,
//! ).unwrap();
//!
//! match sunrise {
//!     EventTime::Occurs(time) => {
//!         let (hour, minute, _) = time.clock_time();
//!         println!("Sunrise at {hour:02}:{minute:02}");
//!     }
//!     EventTime::NoEvent(condition) => println!("No sunrise: {condition:?}"),
//! }
//! ```
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_almanac::{usno, Zenith};
//! use chrono::{FixedOffset, NaiveDate};
//!
//! let date = NaiveDate::from_ymd_opt(2026, 6, 21).unwrap();
//! let cest = FixedOffset::east_opt(2 * 3600).unwrap();
//! let result = usno::sunrise_sunset_datetime(date, cest, 48.21, 16.37, Zenith::Civil).unwrap();
//!
//! if let (Some(dawn), Some(dusk)) = (result.sunrise(), result.sunset()) {
//!     println!("Civil dawn: {dawn}");
//!     println!("Civil dusk: {dusk}");
//! }
//! # }
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, strictly between -90° and +90° (undefined at the poles)
//! - **Longitude**: degrees, -180° to +180°, positive East
//! - **Zenith angle**: 0° = directly overhead, 90° = geometric horizon; 90.833° official,
//!   96° civil, 102° nautical, 108° astronomical
//! - **Result**: hours; UTC is wrapped to [0, 24) before the offset is added, and the sum
//!   is not wrapped again
//!
//! ## References
//!
//! - Almanac for Computers, 1990. Nautical Almanac Office, United States Naval Observatory,
//!   Washington, DC 20392.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::time::CalendarDate;
pub use crate::types::{EventTime, LocalHours, PolarCondition, SolarEvent, SunriseSunset, Zenith};

// Algorithm modules
pub mod usno;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
