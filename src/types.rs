//! Core data types for sunrise/sunset calculations.

use crate::Result;
use crate::error::check_zenith;
use crate::math::{normalize_hours_0_to_24, round};

/// Which crossing of the zenith threshold to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Morning crossing (sun rising through the zenith threshold)
    Sunrise,
    /// Evening crossing (sun setting through the zenith threshold)
    Sunset,
}

impl SolarEvent {
    /// Nominal local hour the almanac uses to seed the approximate time (6 or 18).
    #[must_use]
    pub const fn anchor_hour(&self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }
}

/// Zenith angle defining a sunrise/sunset or twilight event.
///
/// The angle is measured from directly overhead; 90° is the geometric horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zenith {
    /// Official sunrise/sunset, 90°50′ (upper limb on the horizon, with refraction)
    Official,
    /// Civil twilight (sun 6° below horizon)
    Civil,
    /// Nautical twilight (sun 12° below horizon)
    Nautical,
    /// Astronomical twilight (sun 18° below horizon)
    Astronomical,
    /// Custom zenith angle in degrees
    Custom(f64),
}

impl Zenith {
    /// Zenith for official sunrise/sunset, 90°50′.
    pub const OFFICIAL_DEGREES: f64 = 90.833;
    /// Zenith for civil twilight.
    pub const CIVIL_DEGREES: f64 = 96.0;
    /// Zenith for nautical twilight.
    pub const NAUTICAL_DEGREES: f64 = 102.0;
    /// Zenith for astronomical twilight.
    pub const ASTRONOMICAL_DEGREES: f64 = 108.0;

    /// Gets the zenith angle in degrees.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Official => Self::OFFICIAL_DEGREES,
            Self::Civil => Self::CIVIL_DEGREES,
            Self::Nautical => Self::NAUTICAL_DEGREES,
            Self::Astronomical => Self::ASTRONOMICAL_DEGREES,
            Self::Custom(degrees) => *degrees,
        }
    }

    /// Creates a custom zenith with the specified angle.
    ///
    /// # Errors
    /// Returns `InvalidZenith` if the angle is not strictly between 0 and 180 degrees.
    pub fn custom(degrees: f64) -> Result<Self> {
        check_zenith(degrees)?;
        Ok(Self::Custom(degrees))
    }
}

impl Eq for Zenith {}

impl core::hash::Hash for Zenith {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Official => 0.hash(state),
            Self::Civil => 1.hash(state),
            Self::Nautical => 2.hash(state),
            Self::Astronomical => 3.hash(state),
            Self::Custom(degrees) => {
                4.hash(state);
                // Normalize -0.0 and +0.0 so hashing remains consistent with PartialEq
                let normalized = if *degrees == 0.0 { 0.0 } else { *degrees };
                normalized.to_bits().hash(state);
            }
        }
    }
}

/// Local clock time in hours, as produced by the almanac method.
///
/// The value is the UTC time normalized to [0, 24) plus the caller's UTC offset and is
/// not wrapped again, so it may be negative or ≥ 24.0. Use [`day_and_hours`](Self::day_and_hours)
/// to split it into a day offset and the clock time.
///
/// # Example
/// ```
/// # use solar_almanac::LocalHours;
/// let sunrise = LocalHours::from_hours(28.75);
/// let (day_offset, hours) = sunrise.day_and_hours();
/// assert_eq!(day_offset, 1);
/// assert!((hours - 4.75).abs() < 1e-10);
/// assert_eq!(sunrise.clock_time(), (4, 45, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalHours(f64);

impl LocalHours {
    /// Creates a new `LocalHours` from a raw hour value.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative or ≥ 24.0.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and the clock hours (0.0 to < 24.0).
    ///
    /// # Returns
    /// Tuple of (`day_offset`, `hours_in_day`) where `day_offset` is the number of whole
    /// days the raw value lies before (negative) or after (positive) the 0..24 window.
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let hours_in_day = normalize_hours_0_to_24(hours);
        let day_offset_raw = round((hours - hours_in_day) / 24.0);

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, hours_in_day)
    }

    /// Clock time as (hour, minute, second), rounded to the nearest second.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn clock_time(&self) -> (u32, u32, u32) {
        let (_, hours) = self.day_and_hours();
        let total_seconds = round(hours * 3600.0) as u32 % 86_400;
        (
            total_seconds / 3600,
            total_seconds % 3600 / 60,
            total_seconds % 60,
        )
    }
}

/// Why no event exists on the requested date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// The sun stays above the zenith threshold all day.
    PolarDay,
    /// The sun stays below the zenith threshold all day.
    PolarNight,
}

/// Outcome of a single sunrise or sunset calculation.
///
/// `T` is [`LocalHours`] for the numeric API and `chrono::DateTime<FixedOffset>`
/// for the chrono API.
#[derive(Debug, Clone, PartialEq)]
pub enum EventTime<T = LocalHours> {
    /// The sun crosses the zenith threshold at this time.
    Occurs(T),
    /// The sun does not cross the zenith threshold on this date.
    NoEvent(PolarCondition),
}

impl<T> EventTime<T> {
    /// Gets the event time if the event occurs.
    pub const fn occurs(&self) -> Option<&T> {
        if let Self::Occurs(time) = self {
            Some(time)
        } else {
            None
        }
    }

    /// Checks if this is the no-event signal.
    pub const fn is_no_event(&self) -> bool {
        matches!(self, Self::NoEvent(_))
    }

    /// Gets the polar condition if no event occurs.
    pub const fn polar_condition(&self) -> Option<PolarCondition> {
        if let Self::NoEvent(condition) = self {
            Some(*condition)
        } else {
            None
        }
    }

    /// Maps the event time, leaving the no-event signal untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> EventTime<U> {
        match self {
            Self::Occurs(time) => EventTime::Occurs(f(time)),
            Self::NoEvent(condition) => EventTime::NoEvent(condition),
        }
    }
}

/// Sunrise and sunset for one date, location and zenith.
///
/// The two branches are computed independently, so at the edge of a polar period one
/// may occur while the other does not.
#[derive(Debug, Clone, PartialEq)]
pub struct SunriseSunset<T = LocalHours> {
    /// Morning event
    pub sunrise: EventTime<T>,
    /// Evening event
    pub sunset: EventTime<T>,
}

impl<T> SunriseSunset<T> {
    /// Gets sunrise time if it occurs.
    pub const fn sunrise(&self) -> Option<&T> {
        self.sunrise.occurs()
    }

    /// Gets sunset time if it occurs.
    pub const fn sunset(&self) -> Option<&T> {
        self.sunset.occurs()
    }

    /// Checks if both events occur.
    pub const fn is_regular_day(&self) -> bool {
        matches!(
            (&self.sunrise, &self.sunset),
            (EventTime::Occurs(_), EventTime::Occurs(_))
        )
    }
}

impl SunriseSunset<LocalHours> {
    /// Hours from sunrise to sunset on the clock, in [0, 24).
    ///
    /// Returns `None` unless both events occur.
    #[must_use]
    pub fn day_length_hours(&self) -> Option<f64> {
        let sunrise = self.sunrise()?.hours();
        let sunset = self.sunset()?.hours();
        Some(normalize_hours_0_to_24(sunset - sunrise))
    }
}
