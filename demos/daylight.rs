use std::error::Error;

use chrono::NaiveDate;
use log::LevelFilter;

use northfront::daylight::{day_of_year, daylight_duration, solar_declination, DaylightGrid};
use northfront::geo::format_latitude;

/// Print the daylight duration by latitude at the solstices and equinoxes.
///
/// `cargo run --example daylight`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let dates = [
        NaiveDate::from_ymd_opt(2024, 3, 20),
        NaiveDate::from_ymd_opt(2024, 6, 21),
        NaiveDate::from_ymd_opt(2024, 9, 22),
        NaiveDate::from_ymd_opt(2024, 12, 21),
    ];

    for date in dates.into_iter().flatten() {
        let grid = DaylightGrid::new(date, Some(15.0), Some(30.0))?;
        println!(
            "{date} (solar declination {:.2}°)",
            solar_declination(day_of_year(&date))
        );
        for (row, latitude) in grid.latitudes().iter().enumerate() {
            let hours = grid.durations()[(row, 0)];
            println!("  {:>7}: {:5.2} hours", format_latitude(*latitude, 0), hours);
        }
        println!();
    }

    let oslo = NaiveDate::from_ymd_opt(2024, 6, 21).ok_or("invalid date")?;
    println!(
        "Oslo at the summer solstice: {:.1} hours",
        daylight_duration(59.9, &oslo)
    );
    Ok(())
}
