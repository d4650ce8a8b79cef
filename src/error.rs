//! Error types for the almanac calculator.
//!
//! A sun that never crosses the requested zenith is not an error; it is reported
//! as [`EventTime::NoEvent`](crate::EventTime::NoEvent).

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during sunrise/sunset calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be strictly between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid zenith angle (must be strictly between 0 and 180 degrees).
    InvalidZenith {
        /// The invalid zenith angle provided.
        value: f64,
    },
    /// Invalid UTC offset (must be a finite number of hours).
    InvalidUtcOffset {
        /// The invalid offset provided.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// An intermediate value left the domain of the formula.
    DomainError {
        /// Description of the non-finite quantity.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be strictly between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidZenith { value } => {
                write!(
                    f,
                    "invalid zenith {value}° (must be strictly between 0° and 180°)"
                )
            }
            Self::InvalidUtcOffset { value } => {
                write!(f, "invalid UTC offset {value} h (must be finite)")
            }
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
            }
            Self::DomainError { message } => {
                write!(f, "domain error: {message}")
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

    /// Creates an invalid zenith error.
    #[must_use]
    pub const fn invalid_zenith(value: f64) -> Self {
        Self::InvalidZenith { value }
    }

    /// Creates an invalid UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(value: f64) -> Self {
        Self::InvalidUtcOffset { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates a domain error.
    #[must_use]
    pub const fn domain_error(message: &'static str) -> Self {
        Self::DomainError { message }
    }
}

/// Validates latitude is strictly inside (-90, +90) degrees.
///
/// The poles are excluded: `cos(latitude)` divides the hour-angle ratio.
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is non-finite or not strictly between -90 and +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(latitude > -90.0 && latitude < 90.0) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
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

/// Validates a zenith angle is strictly inside (0, 180) degrees.
///
/// # Errors
/// Returns `InvalidZenith` if the zenith is non-finite or outside the open interval.
pub fn check_zenith(zenith: f64) -> Result<()> {
    if !(zenith > 0.0 && zenith < 180.0) {
        return Err(Error::invalid_zenith(zenith));
    }
    Ok(())
}

/// Validates a fixed UTC offset in hours.
///
/// # Errors
/// Returns `InvalidUtcOffset` if the offset is NaN or infinite.
pub fn check_utc_offset(offset_hours: f64) -> Result<()> {
    if !offset_hours.is_finite() {
        return Err(Error::invalid_utc_offset(offset_hours));
    }
    Ok(())
}

/// Ensures an intermediate quantity is finite.
///
/// # Errors
/// Returns `DomainError` with `what` as the message when `value` is NaN or infinite.
pub fn check_finite(value: f64, what: &'static str) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::domain_error(what));
    }
    Ok(value)
}
