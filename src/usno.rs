//! Almanac for Computers sunrise/sunset algorithm.
//!
//! Closed-form approximation published by the Nautical Almanac Office of the U.S. Naval
//! Observatory (Almanac for Computers, 1990). It computes the local clock time at which the
//! sun crosses a given zenith angle, typically to within a couple of minutes for latitudes
//! where the sun rises and sets normally. Refraction variability, observer elevation and
//! higher-order orbital terms are not modelled.
//!
//! All angles are in degrees; conversion to radians happens only inside the trig helpers.
//!
//! Reference worked example: <https://www.edwilliams.org/sunrise_sunset_example.htm>

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::too_many_arguments)]

use crate::error::{check_coordinates, check_finite, check_utc_offset, check_zenith};
use crate::math::{
    acos_deg, asin_deg, atan_deg, cos_deg, floor, normalize_degrees_0_to_360,
    normalize_hours_0_to_24, sin_deg, tan_deg,
};
use crate::time::CalendarDate;
use crate::{EventTime, LocalHours, PolarCondition, Result, SolarEvent, SunriseSunset, Zenith};
use log::{debug, trace};

#[cfg(feature = "chrono")]
use crate::Error;
#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, TimeZone};

/// Sun's mean daily motion in mean anomaly (degrees per day).
const MEAN_ANOMALY_RATE: f64 = 0.9856;

/// Mean anomaly at the almanac epoch (degrees).
const MEAN_ANOMALY_OFFSET: f64 = 3.289;

/// Longitude of perihelion plus 180° (degrees).
const PERIHELION_OFFSET: f64 = 282.634;

/// cos of the obliquity of the ecliptic, used for right ascension.
const COS_OBLIQUITY: f64 = 0.91764;

/// sin of the obliquity of the ecliptic, used for declination.
const SIN_OBLIQUITY: f64 = 0.39782;

/// Sidereal correction of the local mean time (hours per day).
const SIDEREAL_RATE: f64 = 0.06571;

/// Constant term of the local mean time (hours).
const LOCAL_MEAN_TIME_OFFSET: f64 = 6.622;

/// Degrees of longitude or hour angle per hour.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Calculate the local clock time of sunrise or sunset.
///
/// # Arguments
/// * `year` - Year (proleptic Gregorian; may be negative)
/// * `month` - Month (1-12)
/// * `day` - Day of month
/// * `local_offset_hours` - Fixed UTC offset added to the result (e.g. -4.0 for EDT)
/// * `latitude` - Observer latitude in degrees, strictly between -90 and +90
/// * `longitude` - Observer longitude in degrees (-180 to +180, positive East)
/// * `zenith` - Zenith angle in degrees defining the event, strictly between 0 and 180
/// * `event` - Sunrise or sunset
///
/// # Returns
/// `EventTime::Occurs` with the local time in hours. The UTC time is wrapped into [0, 24)
/// before the offset is added and is not wrapped again, so the value may be negative or
/// ≥ 24. `EventTime::NoEvent` when the sun does not cross `zenith` on that date.
///
/// # Errors
/// Returns error for an invalid date, out-of-range coordinates or zenith, a non-finite
/// offset, or a non-finite intermediate value.
///
/// # Example
/// ```
/// use solar_almanac::{usno, EventTime, SolarEvent, Zenith};
///
/// // Worked example from the almanac: Wayne, NJ, June 25, 1990, EDT
/// let sunrise = usno::event_time(
///     1990, 6, 25,
///     -4.0,          // EDT
///     40.9,          // latitude
///     -74.3,         // longitude (West is negative)
///     Zenith::OFFICIAL_DEGREES,
///     SolarEvent::Sunrise,
/// ).unwrap();
///
/// if let EventTime::Occurs(time) = sunrise {
///     assert_eq!(time.clock_time(), (5, 26, 29));
/// }
/// ```
pub fn event_time(
    year: i32,
    month: u32,
    day: u32,
    local_offset_hours: f64,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    event: SolarEvent,
) -> Result<EventTime> {
    let date = CalendarDate::new(year, month, day)?;
    event_time_on(date, local_offset_hours, latitude, longitude, zenith, event)
}

/// Calculate the local clock time of sunrise or sunset for a named zenith.
///
/// # Errors
/// Returns error for an invalid date, out-of-range coordinates or zenith, or a non-finite offset.
///
/// # Example
/// ```
/// use solar_almanac::{usno, SolarEvent, Zenith};
///
/// let dusk = usno::event_time_for_zenith(
///     2024, 12, 21, 8.0,
///     39.9042, 116.4074,   // Beijing
///     Zenith::Civil,
///     SolarEvent::Sunset,
/// ).unwrap();
/// assert!(dusk.occurs().is_some());
/// ```
pub fn event_time_for_zenith(
    year: i32,
    month: u32,
    day: u32,
    local_offset_hours: f64,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
    event: SolarEvent,
) -> Result<EventTime> {
    event_time(
        year,
        month,
        day,
        local_offset_hours,
        latitude,
        longitude,
        zenith.degrees(),
        event,
    )
}

/// Calculate sunrise or sunset for an already validated date.
///
/// # Errors
/// Returns error for out-of-range coordinates or zenith, a non-finite offset, or a
/// non-finite intermediate value.
pub fn event_time_on(
    date: CalendarDate,
    local_offset_hours: f64,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    event: SolarEvent,
) -> Result<EventTime> {
    check_coordinates(latitude, longitude)?;
    check_zenith(zenith)?;
    check_utc_offset(local_offset_hours)?;

    let utc = calculate_utc_event_hours(date, latitude, longitude, zenith, event)?;

    // 10. convert UT to the caller's fixed offset (no second normalization)
    Ok(utc.map(|ut| LocalHours::from_hours(ut + local_offset_hours)))
}

/// Calculate both sunrise and sunset for one date.
///
/// # Errors
/// Returns error for an invalid date, out-of-range coordinates or zenith, or a non-finite offset.
///
/// # Example
/// ```
/// use solar_almanac::{usno, Zenith};
///
/// let result = usno::sunrise_sunset(
///     2024, 6, 21, 8.0,
///     39.9042, 116.4074,   // Beijing
///     Zenith::OFFICIAL_DEGREES,
/// ).unwrap();
///
/// let sunrise = result.sunrise().unwrap();
/// let sunset = result.sunset().unwrap();
/// assert_eq!(sunrise.clock_time().0, 4);
/// assert_eq!(sunset.clock_time().0, 19);
/// ```
pub fn sunrise_sunset(
    year: i32,
    month: u32,
    day: u32,
    local_offset_hours: f64,
    latitude: f64,
    longitude: f64,
    zenith: f64,
) -> Result<SunriseSunset> {
    let date = CalendarDate::new(year, month, day)?;
    Ok(SunriseSunset {
        sunrise: event_time_on(
            date,
            local_offset_hours,
            latitude,
            longitude,
            zenith,
            SolarEvent::Sunrise,
        )?,
        sunset: event_time_on(
            date,
            local_offset_hours,
            latitude,
            longitude,
            zenith,
            SolarEvent::Sunset,
        )?,
    })
}

/// Calculate both sunrise and sunset for one date and a named zenith.
///
/// # Errors
/// Returns error for an invalid date, out-of-range coordinates or zenith, or a non-finite offset.
pub fn sunrise_sunset_for_zenith(
    year: i32,
    month: u32,
    day: u32,
    local_offset_hours: f64,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> Result<SunriseSunset> {
    sunrise_sunset(
        year,
        month,
        day,
        local_offset_hours,
        latitude,
        longitude,
        zenith.degrees(),
    )
}

/// Calculate sunrise or sunset as a `DateTime` on the given local date.
///
/// The UTC offset is taken from `offset`. Timezone and daylight-saving rules must
/// already be resolved to that fixed offset. The event is placed on `date` at its
/// wrapped clock time.
///
/// # Errors
/// Returns error for out-of-range coordinates or a date whose local midnight is not
/// representable.
///
/// # Example
/// ```rust
/// use solar_almanac::{usno, SolarEvent, Zenith};
/// use chrono::{FixedOffset, NaiveDate, Timelike};
///
/// let edt = FixedOffset::west_opt(4 * 3600).unwrap();
/// let date = NaiveDate::from_ymd_opt(1990, 6, 25).unwrap();
/// let sunrise =
///     usno::event_datetime(date, edt, 40.9, -74.3, Zenith::Official, SolarEvent::Sunrise)
///         .unwrap();
///
/// let sunrise = sunrise.occurs().unwrap();
/// assert_eq!((sunrise.hour(), sunrise.minute()), (5, 26));
/// ```
#[cfg(feature = "chrono")]
pub fn event_datetime(
    date: NaiveDate,
    offset: FixedOffset,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
    event: SolarEvent,
) -> Result<EventTime<DateTime<FixedOffset>>> {
    let hours = event_time_on(
        date.into(),
        offset_hours(offset),
        latitude,
        longitude,
        zenith.degrees(),
        event,
    )?;

    match hours {
        EventTime::Occurs(time) => Ok(EventTime::Occurs(on_local_date(date, offset, time)?)),
        EventTime::NoEvent(condition) => Ok(EventTime::NoEvent(condition)),
    }
}

/// Calculate sunrise and sunset as `DateTime`s on the given local date.
///
/// # Errors
/// Returns error for out-of-range coordinates or a date whose local midnight is not
/// representable.
#[cfg(feature = "chrono")]
pub fn sunrise_sunset_datetime(
    date: NaiveDate,
    offset: FixedOffset,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> Result<SunriseSunset<DateTime<FixedOffset>>> {
    Ok(SunriseSunset {
        sunrise: event_datetime(
            date,
            offset,
            latitude,
            longitude,
            zenith,
            SolarEvent::Sunrise,
        )?,
        sunset: event_datetime(date, offset, latitude, longitude, zenith, SolarEvent::Sunset)?,
    })
}

/// Steps 1 to 9: UTC hours of the event in [0, 24), or the polar condition.
fn calculate_utc_event_hours(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    event: SolarEvent,
) -> Result<EventTime<f64>> {
    // 1. day of the year
    let n = f64::from(date.almanac_day_of_year());

    // 2. longitude to hours, approximate time
    let lng_hour = longitude / DEGREES_PER_HOUR;
    let t = n + ((event.anchor_hour() - lng_hour) / 24.0);

    // 3. mean anomaly
    let m = MEAN_ANOMALY_RATE * t - MEAN_ANOMALY_OFFSET;

    // 4. true longitude
    let l = calculate_true_longitude(m);

    // 5. right ascension, in hours
    let ra = calculate_right_ascension_hours(l);

    // 6. declination
    let sin_dec = SIN_OBLIQUITY * sin_deg(l);
    let cos_dec = cos_deg(asin_deg(sin_dec));

    // 7a. local hour angle
    let cos_h = check_finite(
        (cos_deg(zenith) - sin_dec * sin_deg(latitude)) / (cos_dec * cos_deg(latitude)),
        "cosine of local hour angle is not finite",
    )?;

    trace!("{event:?} {date:?}: t={t} M={m} L={l} RA={ra} sinDec={sin_dec} cosH={cos_h}");

    if let Some(condition) = check_polar_condition(cos_h) {
        debug!(
            "no {event:?} on {date:?}: {condition:?} (lat={latitude} zenith={zenith} cosH={cos_h})"
        );
        return Ok(EventTime::NoEvent(condition));
    }

    // 7b. finish H and convert to hours
    let h = calculate_local_hour_angle_hours(cos_h, event);

    // 8. local mean time of the event
    let local_mean_time = h + ra - SIDEREAL_RATE * t - LOCAL_MEAN_TIME_OFFSET;

    // 9. back to UTC
    let ut = normalize_hours_0_to_24(local_mean_time - lng_hour);

    trace!("{event:?} {date:?}: H={h} T={local_mean_time} UT={ut}");

    Ok(EventTime::Occurs(check_finite(ut, "event time is not finite")?))
}

/// Sun's true longitude in degrees, in [0, 360).
fn calculate_true_longitude(mean_anomaly: f64) -> f64 {
    normalize_degrees_0_to_360(
        mean_anomaly
            + 1.916 * sin_deg(mean_anomaly)
            + 0.020 * sin_deg(2.0 * mean_anomaly)
            + PERIHELION_OFFSET,
    )
}

/// Sun's right ascension in hours, placed in the same quadrant as `true_longitude`.
fn calculate_right_ascension_hours(true_longitude: f64) -> f64 {
    let ra = normalize_degrees_0_to_360(atan_deg(COS_OBLIQUITY * tan_deg(true_longitude)));

    let l_quadrant = floor(true_longitude / 90.0) * 90.0;
    let ra_quadrant = floor(ra / 90.0) * 90.0;

    (ra + (l_quadrant - ra_quadrant)) / DEGREES_PER_HOUR
}

/// Polar condition when `cos_h` has no inverse cosine.
///
/// Applies to both events: the sun stays below the zenith all day (`cos_h > 1`) or
/// above it all day (`cos_h < -1`).
fn check_polar_condition(cos_h: f64) -> Option<PolarCondition> {
    if cos_h > 1.0 {
        Some(PolarCondition::PolarNight)
    } else if cos_h < -1.0 {
        Some(PolarCondition::PolarDay)
    } else {
        None
    }
}

/// Local hour angle in hours. `cos_h` must be within [-1, 1].
fn calculate_local_hour_angle_hours(cos_h: f64, event: SolarEvent) -> f64 {
    let h = match event {
        SolarEvent::Sunrise => 360.0 - acos_deg(cos_h),
        SolarEvent::Sunset => acos_deg(cos_h),
    };
    h / DEGREES_PER_HOUR
}

#[cfg(feature = "chrono")]
const MILLIS_PER_DAY: i64 = 86_400_000;

#[cfg(feature = "chrono")]
fn offset_hours(offset: FixedOffset) -> f64 {
    f64::from(offset.local_minus_utc()) / 3600.0
}

#[cfg(feature = "chrono")]
#[allow(clippy::cast_possible_truncation)]
fn on_local_date(
    date: NaiveDate,
    offset: FixedOffset,
    time: LocalHours,
) -> Result<DateTime<FixedOffset>> {
    let (_, clock_hours) = time.day_and_hours();

    let local_midnight = date
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| offset.from_local_datetime(&midnight).single())
        .ok_or(Error::invalid_date("local midnight is not representable"))?;

    // rounding must not carry the last instant of the day over midnight
    let millis = crate::math::round(clock_hours * 3_600_000.0) as i64;
    let millis = millis.min(MILLIS_PER_DAY - 1);

    TimeDelta::try_milliseconds(millis)
        .and_then(|delta| local_midnight.checked_add_signed(delta))
        .ok_or(Error::invalid_date("event time is not representable"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn expect_hours(result: EventTime) -> f64 {
        match result {
            EventTime::Occurs(time) => time.hours(),
            EventTime::NoEvent(condition) => panic!("expected an event, got {condition:?}"),
        }
    }

    #[test]
    fn test_worked_example_intermediate_values() {
        // Wayne, NJ, June 25, 1990 (values from the published worked example)
        let t: f64 = 176.0 + ((6.0 - (-74.3 / 15.0)) / 24.0);
        assert!((t - 176.456).abs() < 1e-3);

        let m = MEAN_ANOMALY_RATE * t - MEAN_ANOMALY_OFFSET;
        assert!((m - 170.626).abs() < 1e-3);

        let l = calculate_true_longitude(m);
        assert!((l - 93.56).abs() < 1e-2);

        let ra = calculate_right_ascension_hours(l);
        assert!((ra - 6.259).abs() < 1e-2);
    }

    #[test]
    fn test_worked_example_sunrise() {
        let sunrise = expect_hours(
            event_time(1990, 6, 25, 0.0, 40.9, -74.3, 90.833, SolarEvent::Sunrise).unwrap(),
        );
        // Published result: UT = 9.441
        assert!((sunrise - 9.441).abs() < 1e-3);

        let edt = expect_hours(
            event_time(1990, 6, 25, -4.0, 40.9, -74.3, 90.833, SolarEvent::Sunrise).unwrap(),
        );
        assert!((edt - 5.441_433_320).abs() < EPSILON);
    }

    #[test]
    fn test_right_ascension_follows_true_longitude_quadrant() {
        for l in [10.0, 95.0, 179.0, 185.0, 269.0, 275.0, 359.0] {
            let ra_degrees = calculate_right_ascension_hours(l) * DEGREES_PER_HOUR;
            assert_eq!(
                floor(ra_degrees / 90.0),
                floor(l / 90.0),
                "L={l} RA={ra_degrees}"
            );
            assert!((ra_degrees - l).abs() < 3.0, "L={l} RA={ra_degrees}");
        }
    }

    #[test]
    fn test_polar_condition_thresholds() {
        assert_eq!(check_polar_condition(1.2), Some(PolarCondition::PolarNight));
        assert_eq!(check_polar_condition(-1.2), Some(PolarCondition::PolarDay));
        assert_eq!(check_polar_condition(1.0), None);
        assert_eq!(check_polar_condition(-1.0), None);
        assert_eq!(check_polar_condition(0.3), None);
    }

    #[test]
    fn test_hour_angle_branches_are_symmetric() {
        let rise = calculate_local_hour_angle_hours(0.25, SolarEvent::Sunrise);
        let set = calculate_local_hour_angle_hours(0.25, SolarEvent::Sunset);
        assert!((rise + set - 24.0).abs() < EPSILON);
    }

    #[test]
    fn test_polar_night_sunrise() {
        let result =
            event_time(2023, 12, 21, 1.0, 78.0, 15.0, 90.833, SolarEvent::Sunrise).unwrap();
        assert_eq!(result, EventTime::NoEvent(PolarCondition::PolarNight));
    }

    #[test]
    fn test_polar_day_sunset() {
        let result =
            event_time(2023, 6, 21, 2.0, 78.0, 15.0, 90.833, SolarEvent::Sunset).unwrap();
        assert_eq!(result, EventTime::NoEvent(PolarCondition::PolarDay));

        let result =
            event_time(2023, 6, 21, 2.0, 78.0, 15.0, 90.833, SolarEvent::Sunrise).unwrap();
        assert_eq!(result, EventTime::NoEvent(PolarCondition::PolarDay));
    }

    #[test]
    fn test_offset_is_purely_additive() {
        let base = expect_hours(
            event_time(2024, 3, 20, 0.0, 48.21, 16.37, 96.0, SolarEvent::Sunset).unwrap(),
        );
        for delta in [-12.0, -5.5, 0.25, 1.0, 14.0] {
            let shifted = expect_hours(
                event_time(2024, 3, 20, delta, 48.21, 16.37, 96.0, SolarEvent::Sunset).unwrap(),
            );
            assert!((shifted - base - delta).abs() < EPSILON);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let sunrise = SolarEvent::Sunrise;
        assert!(matches!(
            event_time(2024, 13, 1, 0.0, 0.0, 0.0, 90.833, sunrise),
            Err(crate::Error::InvalidDate { .. })
        ));
        assert!(matches!(
            event_time(2023, 2, 29, 0.0, 0.0, 0.0, 90.833, sunrise),
            Err(crate::Error::InvalidDate { .. })
        ));
        assert!(matches!(
            event_time(2024, 6, 21, 0.0, 90.0, 0.0, 90.833, sunrise),
            Err(crate::Error::InvalidLatitude { .. })
        ));
        assert!(matches!(
            event_time(2024, 6, 21, 0.0, -90.0, 0.0, 90.833, sunrise),
            Err(crate::Error::InvalidLatitude { .. })
        ));
        assert!(matches!(
            event_time(2024, 6, 21, 0.0, 0.0, 180.5, 90.833, sunrise),
            Err(crate::Error::InvalidLongitude { .. })
        ));
        assert!(matches!(
            event_time(2024, 6, 21, 0.0, 0.0, 0.0, 180.0, sunrise),
            Err(crate::Error::InvalidZenith { .. })
        ));
        assert!(matches!(
            event_time(2024, 6, 21, f64::NAN, 0.0, 0.0, 90.833, sunrise),
            Err(crate::Error::InvalidUtcOffset { .. })
        ));
    }

    #[test]
    fn test_named_zenith_matches_degrees() {
        let named = event_time_for_zenith(
            2024,
            6,
            21,
            8.0,
            39.9042,
            116.4074,
            Zenith::Nautical,
            SolarEvent::Sunrise,
        )
        .unwrap();
        let raw =
            event_time(2024, 6, 21, 8.0, 39.9042, 116.4074, 102.0, SolarEvent::Sunrise).unwrap();
        assert_eq!(named, raw);
    }

    #[test]
    fn test_sunrise_sunset_matches_single_events() {
        let both = sunrise_sunset(2024, 12, 21, 8.0, 39.9042, 116.4074, 90.833).unwrap();
        let rise = event_time(
            2024,
            12,
            21,
            8.0,
            39.9042,
            116.4074,
            90.833,
            SolarEvent::Sunrise,
        )
        .unwrap();
        let set = event_time(
            2024,
            12,
            21,
            8.0,
            39.9042,
            116.4074,
            90.833,
            SolarEvent::Sunset,
        )
        .unwrap();
        assert_eq!(both.sunrise, rise);
        assert_eq!(both.sunset, set);
        assert!(both.is_regular_day());
    }

    #[test]
    fn test_negative_and_distant_years_are_accepted() {
        for year in [-4713, -1, 0, 1, 3000, 100_000] {
            let result = sunrise_sunset(year, 3, 21, 0.0, 10.0, 0.0, 90.833).unwrap();
            assert!(result.is_regular_day(), "year {year}");
        }
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_event_datetime_uses_requested_local_date() {
        use chrono::{Datelike, Timelike};

        let cst = FixedOffset::east_opt(8 * 3600).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let result =
            sunrise_sunset_datetime(date, cst, 39.9042, 116.4074, Zenith::Official).unwrap();

        let sunrise = result.sunrise().unwrap();
        assert_eq!(sunrise.date_naive(), date);
        assert_eq!((sunrise.hour(), sunrise.minute()), (4, 45));
        assert_eq!(sunrise.offset(), &cst);

        let sunset = result.sunset().unwrap();
        assert_eq!(sunset.day(), 21);
        assert_eq!((sunset.hour(), sunset.minute()), (19, 46));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_event_datetime_polar_night() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 12, 21).unwrap();
        let result =
            event_datetime(date, cet, 78.0, 15.0, Zenith::Official, SolarEvent::Sunrise).unwrap();
        assert_eq!(result, EventTime::NoEvent(PolarCondition::PolarNight));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_event_just_before_midnight_stays_on_requested_date() {
        use chrono::Timelike;

        let utc = FixedOffset::east_opt(0).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

        let late = on_local_date(date, utc, LocalHours::from_hours(24.0 - 1e-10)).unwrap();
        assert_eq!(late.date_naive(), date);
        assert_eq!((late.hour(), late.minute(), late.second()), (23, 59, 59));

        let early = on_local_date(date, utc, LocalHours::from_hours(1e-10)).unwrap();
        assert_eq!(early.date_naive(), date);
        assert_eq!((early.hour(), early.minute(), early.second()), (0, 0, 0));
    }
}
