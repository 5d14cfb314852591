use crate::geo::City;
use crate::utils::{argsort, Sort};

/// Get the cities whose population is known and larger than zero.
///
/// # Arguments
///
/// * `cities`: The cities.
///
/// returns: `Vec<City>`
pub fn populated_cities(cities: &[City]) -> Vec<City> {
    cities.iter().filter(|c| c.is_populated()).cloned().collect()
}

/// Get the populated cities in the northern hemisphere (strictly north of the equator).
///
/// # Arguments
///
/// * `cities`: The cities.
///
/// returns: `Vec<City>`
pub fn northern_cities(cities: &[City]) -> Vec<City> {
    cities
        .iter()
        .filter(|c| c.latitude > 0.0 && c.is_populated())
        .cloned()
        .collect()
}

/// Get the `n` most populated cities, ordered by distance from the North Pole (closest first).
/// Cities without population are ignored; cities with the same population keep their input order
/// when selecting the largest ones.
///
/// # Arguments
///
/// * `cities`: The cities.
/// * `n`: The number of cities to return.
///
/// returns: `Vec<City>`
pub fn top_by_population(cities: &[City], n: usize) -> Vec<City> {
    let populated = populated_cities(cities);
    let population: Vec<f64> = populated
        .iter()
        .map(|c| c.population.unwrap_or_default() as f64)
        .collect();

    let mut top: Vec<City> = argsort(&population, Sort::Descending)
        .into_iter()
        .take(n)
        .map(|idx| populated[idx].clone())
        .collect();
    top.sort_by(|a, b| {
        a.miles_from_north_pole()
            .total_cmp(&b.miles_from_north_pole())
    });
    top
}
