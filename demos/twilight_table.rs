//! Prints a week of sunrise, sunset and twilight times for a place.
//!
//! Usage: `cargo run --example twilight_table -- [LATITUDE LONGITUDE [ZONE [YYYY-MM-DD]]]`
//!
//! Defaults to Ostrava, Czech Republic, starting today.

use chrono::{DateTime, Days, NaiveDate};
use chrono_tz::Tz;
use sunrise_calc::{DiurnalResult, Horizon, OutputZone, SolarCalculator, SolarEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let latitude: f64 = args.first().map_or(Ok(49.8209), |s| s.parse())?;
    let longitude: f64 = args.get(1).map_or(Ok(18.2625), |s| s.parse())?;
    let zone: OutputZone = args.get(2).map_or("Europe/Prague", String::as_str).parse()?;

    let mut calc = match args.get(3) {
        Some(date) => SolarCalculator::new(latitude, longitude, date.parse::<NaiveDate>()?)?,
        None => SolarCalculator::today(latitude, longitude)?,
    };
    let start = calc.day();

    println!(
        "{:.4}°, {:.4}° in {}\n",
        calc.latitude(),
        calc.longitude(),
        zone.tz().name()
    );
    println!(
        "{:<10}  {:>11}  {:>11}  {:>11}  {:>11}  {:>11}  {:>9}",
        "date", "astronomical", "nautical", "civil", "sunrise", "sunset", "daylight"
    );

    for offset in 0..7 {
        calc.set_day(start + Days::new(offset));

        let dawns = [Horizon::Astronomical, Horizon::Nautical, Horizon::Civil]
            .map(|horizon| format_event(&calc.sunrise_in(horizon, &zone)));
        let sunrise = format_event(&calc.sunrise_in(Horizon::Normal, &zone));
        let sunset = format_event(&calc.sunset_in(Horizon::Normal, &zone));

        let length = calc.day_length();
        println!(
            "{}  {:>11}  {:>11}  {:>11}  {:>11}  {:>11}  {:>3}h {:02}m",
            calc.day(),
            dawns[0],
            dawns[1],
            dawns[2],
            sunrise,
            sunset,
            length.num_hours(),
            length.num_minutes() % 60
        );
    }

    Ok(())
}

fn format_event(event: &SolarEvent<DateTime<Tz>>) -> String {
    match event.result() {
        DiurnalResult::NormalDay => event.instant().format("%H:%M:%S").to_string(),
        DiurnalResult::SunAlwaysAbove => "always up".to_string(),
        DiurnalResult::SunAlwaysBelow => "never up".to_string(),
    }
}
