use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::{FError, Fields};
use crate::geo::{miles_from_north_pole, validate_coordinates};

/// A populated place. The numeric fields are readable by name (`latitude`, `longitude` and
/// `population`) so that cities can be given to the frontier extractor directly.
#[derive(Fields, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct City {
    /// The city name.
    pub name: String,
    /// The ISO-3166 2-letter country code.
    pub country_code: String,
    /// The latitude in degrees.
    pub latitude: f64,
    /// The longitude in degrees.
    pub longitude: f64,
    /// The number of inhabitants, if known.
    pub population: Option<u64>,
}

impl City {
    /// Create a new city.
    ///
    /// # Arguments
    ///
    /// * `name`: The city name.
    /// * `country_code`: The country code.
    /// * `latitude`: The latitude in degrees.
    /// * `longitude`: The longitude in degrees.
    /// * `population`: The number of inhabitants, if known.
    ///
    /// returns: `City`
    pub fn new(
        name: &str,
        country_code: &str,
        latitude: f64,
        longitude: f64,
        population: Option<u64>,
    ) -> Self {
        Self {
            name: name.to_string(),
            country_code: country_code.to_string(),
            latitude,
            longitude,
            population,
        }
    }

    /// The label with the city name and country (for example `Oslo, NO`).
    ///
    /// return: `String`
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country_code)
    }

    /// The distance in miles from the North Pole.
    ///
    /// return: `f64`
    pub fn miles_from_north_pole(&self) -> f64 {
        miles_from_north_pole(self.latitude)
    }

    /// Whether the population is known and larger than zero.
    ///
    /// return: `bool`
    pub fn is_populated(&self) -> bool {
        self.population.is_some_and(|p| p > 0)
    }
}

impl Display for City {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.2}, {:.2})",
            self.label(),
            self.latitude,
            self.longitude
        )
    }
}

/// Check the coordinates of all cities. The error names the first invalid city.
///
/// # Arguments
///
/// * `cities`: The cities.
///
/// returns: `Result<(), FError>`
pub fn validate_cities(cities: &[City]) -> Result<(), FError> {
    cities
        .iter()
        .enumerate()
        .try_for_each(|(idx, c)| validate_coordinates(idx, c.latitude, c.longitude))
}

#[cfg(test)]
mod test {
    use crate::core::Fields;
    use crate::geo::{validate_cities, City};

    #[test]
    fn test_city_fields() {
        let city = City::new("Tromso", "NO", 69.6496, 18.957, Some(64_448));
        assert_eq!(city.field("latitude"), Some(69.6496));
        assert_eq!(city.field("longitude"), Some(18.957));
        assert_eq!(city.field("population"), Some(64_448.0));
        assert_eq!(city.field("name"), None);
        assert_eq!(
            city.field_names(),
            vec!["latitude", "longitude", "population"]
        );
        assert_eq!(city.label(), "Tromso, NO");
        assert_eq!(city.to_string(), "Tromso, NO (69.65, 18.96)");
        assert!(city.is_populated());

        let city = City::new("Ghost town", "US", 40.0, -100.0, None);
        assert_eq!(city.field("population"), None);
        assert!(!city.is_populated());
        assert!(!City::new("Empty", "US", 40.0, -100.0, Some(0)).is_populated());
    }

    #[test]
    fn test_validate_cities() {
        let cities = vec![
            City::new("Oslo", "NO", 59.91, 10.75, Some(580_000)),
            City::new("Nowhere", "XX", 95.0, 10.75, Some(1)),
        ];
        let err = validate_cities(&cities).unwrap_err().to_string();
        assert!(err.contains("#1 has an invalid 'latitude'"), "{}", err);
        assert!(validate_cities(&cities[..1]).is_ok());
    }
}
