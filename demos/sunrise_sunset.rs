//! Sunrise/sunset and twilight times across diverse global locations, using chrono.

use chrono::{FixedOffset, NaiveDate};
use solar_almanac::{EventTime, SolarEvent, Zenith, usno};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    /// Standard-time UTC offset in hours (already resolved by the caller)
    utc_offset_hours: i32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            utc_offset_hours: 1,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
            utc_offset_hours: -9,
        },
        City {
            name: "Beijing, China",
            latitude: 39.9042,
            longitude: 116.4074,
            utc_offset_hours: 8,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            utc_offset_hours: 8,
        },
        City {
            name: "Auckland, New Zealand (daylight time)",
            latitude: -36.840556,
            longitude: 174.74,
            utc_offset_hours: 13,
        },
    ];

    let date = NaiveDate::from_ymd_opt(2023, 12, 21).ok_or("invalid date")?;

    for city in &cities {
        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E",
            city.latitude, city.longitude
        );
        println!("Date: {date} (December solstice), UTC{:+}", city.utc_offset_hours);
        println!();

        let offset =
            FixedOffset::east_opt(city.utc_offset_hours * 3600).ok_or("invalid UTC offset")?;
        print_times(date, offset, city)?;
        println!();
    }

    Ok(())
}

fn print_times(
    date: NaiveDate,
    offset: FixedOffset,
    city: &City,
) -> Result<(), Box<dyn std::error::Error>> {
    let zeniths = [
        ("Sunrise/Sunset", Zenith::Official),
        ("Civil Twilight", Zenith::Civil),
        ("Nautical Twilight", Zenith::Nautical),
        ("Astronomical Twilight", Zenith::Astronomical),
    ];

    for (name, zenith) in zeniths {
        let result =
            usno::sunrise_sunset_datetime(date, offset, city.latitude, city.longitude, zenith)?;

        println!("{name} ({:.3}°):", zenith.degrees());
        for (label, event) in [("start", &result.sunrise), ("end", &result.sunset)] {
            match event {
                EventTime::Occurs(time) => println!("  {label:5}: {}", time.format("%H:%M:%S")),
                EventTime::NoEvent(condition) => println!("  {label:5}: none ({condition:?})"),
            }
        }
    }

    let dawn = usno::event_datetime(
        date,
        offset,
        city.latitude,
        city.longitude,
        Zenith::Civil,
        SolarEvent::Sunrise,
    )?;
    if let Some(dawn) = dawn.occurs() {
        println!("Civil dawn as RFC 3339: {}", dawn.to_rfc3339());
    }

    Ok(())
}
