//! Sunrise/sunset calculation with the numeric API, without the chrono library.

use solar_almanac::{EventTime, SolarEvent, Zenith, usno};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Wayne, New Jersey, June 25, 1990, Eastern Daylight Time
    let result = usno::sunrise_sunset_for_zenith(
        1990,
        6,
        25,
        -4.0,  // EDT, resolved by the caller
        40.9,  // latitude
        -74.3, // longitude (West is negative)
        Zenith::Official,
    )?;

    println!("Wayne, NJ, June 25, 1990 (EDT):");
    for (label, event) in [("Sunrise", &result.sunrise), ("Sunset", &result.sunset)] {
        match event {
            EventTime::Occurs(time) => {
                let (day_offset, hours) = time.day_and_hours();
                let (h, m, s) = time.clock_time();
                println!("  {label:8} {h:02}:{m:02}:{s:02}");
                println!(
                    "           raw {:.4} h, day offset {day_offset}, clock {hours:.4} h",
                    time.hours()
                );
            }
            EventTime::NoEvent(condition) => println!("  {label:8} none ({condition:?})"),
        }
    }
    if let Some(length) = result.day_length_hours() {
        println!("  Day length: {length:.2} hours");
    }

    // Custom zenith: sun 3° below the horizon
    println!("\nWith a custom zenith of 93°:");
    let custom = usno::event_time_for_zenith(
        1990,
        6,
        25,
        -4.0,
        40.9,
        -74.3,
        Zenith::custom(93.0)?,
        SolarEvent::Sunset,
    )?;
    if let EventTime::Occurs(time) = custom {
        let (h, m, s) = time.clock_time();
        println!("  Sunset: {h:02}:{m:02}:{s:02}");
    }

    // Polar night in Svalbard: the sun never rises
    let polar = usno::event_time(
        2023,
        12,
        21,
        1.0,
        78.22,
        15.65,
        Zenith::OFFICIAL_DEGREES,
        SolarEvent::Sunrise,
    )?;
    println!("\nLongyearbyen sunrise on 2023-12-21: {polar:?}");

    Ok(())
}
