use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::core::FError;
use crate::frontier::{FrontierExtractor, FrontierResults};
use crate::geo::{format_latitude, validate_cities, City};
use crate::utils::{format_population, with_thousands_separator};

/// The latitude attribute read from a [`City`].
const LATITUDE_KEY: &str = "latitude";
/// The population attribute read from a [`City`].
const POPULATION_KEY: &str = "population";

/// A city on the frontier with the derived distance from the North Pole.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FrontierCity {
    /// The city and country label.
    pub label: String,
    /// The number of inhabitants.
    pub population: u64,
    /// The latitude in degrees.
    pub latitude: f64,
    /// The longitude in degrees.
    pub longitude: f64,
    /// The distance from the North Pole in miles.
    pub miles_from_north_pole: f64,
}

impl From<&City> for FrontierCity {
    fn from(city: &City) -> Self {
        Self {
            label: city.label(),
            population: city.population.unwrap_or_default(),
            latitude: city.latitude,
            longitude: city.longitude,
            miles_from_north_pole: city.miles_from_north_pole(),
        }
    }
}

/// The largest-northernmost cities: no city is both larger and further north than a city in
/// the report.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FrontierReport {
    /// The extractor configuration used to build the report.
    pub extractor: FrontierExtractor,
    /// The number of cities the frontier was extracted from.
    pub input_size: usize,
    /// The cities on the frontier, northernmost first.
    pub cities: Vec<FrontierCity>,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
}

impl FrontierReport {
    /// Extract the frontier of the cities by latitude and population, and build the report. This
    /// returns an error if a city has invalid coordinates or has no population.
    ///
    /// # Arguments
    ///
    /// * `cities`: The cities.
    /// * `extractor`: The extractor configuration. The latitude is the primary attribute and the
    ///   population the value.
    ///
    /// returns: `Result<FrontierReport, FError>`
    pub fn new(cities: &[City], extractor: &FrontierExtractor) -> Result<Self, FError> {
        validate_cities(cities)?;
        let results = extractor.extract(cities, LATITUDE_KEY, POPULATION_KEY)?;
        Ok(Self::from_results(&results, extractor))
    }

    /// Build the report from an extracted frontier of cities.
    ///
    /// # Arguments
    ///
    /// * `results`: The frontier.
    /// * `extractor`: The extractor used to get `results`.
    ///
    /// returns: `FrontierReport`
    pub fn from_results(results: &FrontierResults<City>, extractor: &FrontierExtractor) -> Self {
        Self {
            extractor: extractor.clone(),
            input_size: results.input_size,
            cities: results.frontier.iter().map(FrontierCity::from).collect(),
            created_at: Utc::now(),
        }
    }

    /// The first city of the frontier.
    ///
    /// return: `Option<&FrontierCity>`
    pub fn northernmost(&self) -> Option<&FrontierCity> {
        self.cities.first()
    }

    /// The most populated city of the frontier.
    ///
    /// return: `Option<&FrontierCity>`
    pub fn largest(&self) -> Option<&FrontierCity> {
        self.cities.iter().max_by_key(|c| c.population)
    }

    /// The smallest and largest population on the frontier.
    ///
    /// return: `Option<(u64, u64)>`
    pub fn population_range(&self) -> Option<(u64, u64)> {
        let min = self.cities.iter().map(|c| c.population).min()?;
        let max = self.cities.iter().map(|c| c.population).max()?;
        Some((min, max))
    }

    /// Serialise the report and export it to a JSON file named `{file_prefix}_frontier.json`.
    ///
    /// # Arguments
    ///
    /// * `destination`: The folder where to save the file.
    /// * `file_prefix`: The file prefix. Default to `Frontier`.
    ///
    /// returns: `Result<PathBuf, FError>`. The path to the file.
    pub fn save_to_json(
        &self,
        destination: &Path,
        file_prefix: Option<&str>,
    ) -> Result<PathBuf, FError> {
        let file_prefix = file_prefix.unwrap_or("Frontier");
        if !destination.exists() {
            return Err(FError::Export(format!(
                "The destination folder '{:?}' does not exist",
                destination
            )));
        }

        let data = serde_json::to_string_pretty(self).map_err(|e| {
            FError::Export(format!(
                "The following error occurred while converting the report: {e}"
            ))
        })?;

        let mut file = destination.to_owned();
        file.push(format!("{file_prefix}_frontier.json"));

        info!("Saving JSON file {:?}", file);
        fs::write(&file, data).map_err(|e| {
            FError::Export(format!(
                "The following error occurred while exporting the report JSON file: {e}",
            ))
        })?;
        Ok(file)
    }

    /// Read a report previously exported with [`Self::save_to_json`].
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// returns: `Result<FrontierReport, FError>`
    pub fn read_json(file: &Path) -> Result<Self, FError> {
        if !file.exists() {
            return Err(FError::Generic(format!(
                "The file '{}' does not exist",
                file.display()
            )));
        }
        let data = fs::File::open(file).map_err(|e| {
            FError::Generic(format!(
                "Cannot read the file '{}' because: {e}",
                file.display()
            ))
        })?;

        serde_json::from_reader(data).map_err(|e| {
            FError::Generic(format!(
                "The file '{}' cannot be deserialised because: {e}",
                file.display()
            ))
        })
    }
}

impl Display for FrontierReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pareto Frontier Cities (Largest-Northernmost):")?;
        writeln!(
            f,
            "Total cities on frontier: {} (out of {})",
            self.cities.len(),
            self.input_size
        )?;

        if let Some(city) = self.northernmost() {
            writeln!(
                f,
                "Northernmost city: {} at {} ({:.0} miles from North Pole)",
                city.label,
                format_latitude(city.latitude, 2),
                city.miles_from_north_pole
            )?;
        }
        if let Some(city) = self.largest() {
            writeln!(
                f,
                "Largest city: {} with {} people",
                city.label,
                with_thousands_separator(city.population)
            )?;
        }
        if let Some((min, max)) = self.population_range() {
            writeln!(
                f,
                "Population range: {} to {}",
                with_thousands_separator(min),
                with_thousands_separator(max)
            )?;
        }

        writeln!(f, "\nCities on the frontier:")?;
        for city in &self.cities {
            writeln!(
                f,
                "  {}: {} people at {} ({:.0} mi)",
                city.label,
                format_population(city.population as f64),
                format_latitude(city.latitude, 2),
                city.miles_from_north_pole
            )?;
        }
        Ok(())
    }
}
