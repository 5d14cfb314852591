use chrono::{Datelike, NaiveDate};
use log::debug;
use rayon::prelude::*;

/// The maximum tilt of the Earth's axis used by the declination formula, in degrees.
pub const MAX_DECLINATION: f64 = 23.45;

/// Get the day of the year (from 1 to 366).
///
/// # Arguments
///
/// * `date`: The date.
///
/// returns: `u32`
pub fn day_of_year(date: &NaiveDate) -> u32 {
    date.ordinal()
}

/// Calculate the solar declination in degrees (between -23.45 and 23.45) with the Cooper's
/// approximation:
///
///  $ \delta = 23.45 \cdot sin(360 \cdot (284 + n) / 365) $
///
/// where $n$ is the day of the year.
///
/// # Arguments
///
/// * `day_of_year`: The day of the year (from 1 to 366).
///
/// returns: `f64`
pub fn solar_declination(day_of_year: u32) -> f64 {
    MAX_DECLINATION * (360.0 * (284.0 + day_of_year as f64) / 365.0).to_radians().sin()
}

/// Calculate the sunrise hour angle in degrees from the sunrise equation:
///
///  $ cos(H) = -tan(\phi) \cdot tan(\delta) $
///
/// where $\phi$ is the latitude and $\delta$ the solar declination. When the sun never sets (polar
/// day) this returns 180 degrees, when it never rises (polar night) 0 degrees.
///
/// # Arguments
///
/// * `latitude`: The latitude in degrees.
/// * `declination`: The solar declination in degrees.
///
/// returns: `f64`
pub fn hour_angle(latitude: f64, declination: f64) -> f64 {
    let cos_hour_angle = -latitude.to_radians().tan() * declination.to_radians().tan();
    if cos_hour_angle < -1.0 {
        180.0
    } else if cos_hour_angle > 1.0 {
        0.0
    } else {
        cos_hour_angle.acos().to_degrees()
    }
}

/// Calculate the daylight duration in hours (between 0 and 24). The sun moves by 15 degrees per
/// hour, therefore the duration is $2 H / 15$, with $H$ the [`hour_angle`].
///
/// # Arguments
///
/// * `latitude`: The latitude in degrees.
/// * `date`: The date.
///
/// returns: `f64`
pub fn daylight_duration(latitude: f64, date: &NaiveDate) -> f64 {
    let declination = solar_declination(day_of_year(date));
    duration_from_declination(latitude, declination)
}

/// Calculate the daylight duration in hours for many latitudes on the same date.
///
/// # Arguments
///
/// * `latitudes`: The latitudes in degrees.
/// * `date`: The date.
/// * `parallel`: Whether to calculate the durations in threads. Default to `false`.
///
/// returns: `Vec<f64>`
pub fn daylight_duration_array(
    latitudes: &[f64],
    date: &NaiveDate,
    parallel: Option<bool>,
) -> Vec<f64> {
    let declination = solar_declination(day_of_year(date));
    debug!(
        "Solar declination on {date} is {declination:.3} degrees for {} latitudes",
        latitudes.len()
    );

    if parallel.unwrap_or(false) {
        latitudes
            .par_iter()
            .map(|lat| duration_from_declination(*lat, declination))
            .collect()
    } else {
        latitudes
            .iter()
            .map(|lat| duration_from_declination(*lat, declination))
            .collect()
    }
}

fn duration_from_declination(latitude: f64, declination: f64) -> f64 {
    2.0 * hour_angle(latitude, declination) / 15.0
}
