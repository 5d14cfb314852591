use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::FError;
use crate::geo::{format_latitude, validate_cities, City};

/// The coordinate used to bin the cities.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BinAxis {
    /// Bin by latitude in [-90; 90].
    Latitude,
    /// Bin by longitude in [-180; 180].
    Longitude,
}

impl BinAxis {
    /// The lower and upper bounds of the coordinate.
    ///
    /// return: `(f64, f64)`
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            BinAxis::Latitude => (-90.0, 90.0),
            BinAxis::Longitude => (-180.0, 180.0),
        }
    }

    /// Read the coordinate from a city.
    fn coordinate(&self, city: &City) -> f64 {
        match self {
            BinAxis::Latitude => city.latitude,
            BinAxis::Longitude => city.longitude,
        }
    }
}

impl Display for BinAxis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BinAxis::Latitude => f.write_str("latitude"),
            BinAxis::Longitude => f.write_str("longitude"),
        }
    }
}

/// A bin with the total population of the cities in it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PopulationBin {
    /// The left edge of the bin, in degrees. This is also the bin label.
    pub edge: f64,
    /// The total population.
    pub population: u64,
}

/// The total population of cities grouped by latitude or longitude bins.
///
/// Bins are right-closed, `(edge; edge + width]`, and labelled by their left edge; the lowest bin
/// also includes its left edge (-90 or -180 degrees). Only bins with population are stored,
/// sorted by edge.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PopulationHistogram {
    /// The binned coordinate.
    axis: BinAxis,
    /// The bin width in degrees.
    bin_width: f64,
    /// The non-empty bins.
    bins: Vec<PopulationBin>,
}

impl PopulationHistogram {
    /// Group the population of the cities by latitude. Cities without population are ignored.
    /// This returns an error if `bin_width` is not strictly positive or a city has invalid
    /// coordinates.
    ///
    /// # Arguments
    ///
    /// * `cities`: The cities.
    /// * `bin_width`: The bin width in degrees. Default to 1 degree.
    ///
    /// returns: `Result<PopulationHistogram, FError>`
    pub fn by_latitude(cities: &[City], bin_width: Option<f64>) -> Result<Self, FError> {
        Self::new(cities, BinAxis::Latitude, bin_width)
    }

    /// Group the population of the cities by longitude. Cities without population are ignored.
    /// This returns an error if `bin_width` is not strictly positive or a city has invalid
    /// coordinates.
    ///
    /// # Arguments
    ///
    /// * `cities`: The cities.
    /// * `bin_width`: The bin width in degrees. Default to 1 degree.
    ///
    /// returns: `Result<PopulationHistogram, FError>`
    pub fn by_longitude(cities: &[City], bin_width: Option<f64>) -> Result<Self, FError> {
        Self::new(cities, BinAxis::Longitude, bin_width)
    }

    /// Group the population of the cities by the given coordinate.
    ///
    /// # Arguments
    ///
    /// * `cities`: The cities.
    /// * `axis`: The coordinate to bin.
    /// * `bin_width`: The bin width in degrees. Default to 1 degree.
    ///
    /// returns: `Result<PopulationHistogram, FError>`
    pub fn new(cities: &[City], axis: BinAxis, bin_width: Option<f64>) -> Result<Self, FError> {
        let bin_width = bin_width.unwrap_or(1.0);
        if !bin_width.is_finite() || bin_width <= 0.0 {
            return Err(FError::InvalidArgument(
                "bin_width".to_string(),
                format!("the width ({bin_width}) must be a finite number larger than zero"),
            ));
        }
        validate_cities(cities)?;

        let (lower, _) = axis.bounds();
        let mut totals: BTreeMap<u64, u64> = BTreeMap::new();
        let mut skipped = 0;
        for city in cities {
            let Some(population) = city.population.filter(|p| *p > 0) else {
                skipped += 1;
                continue;
            };
            let bin = Self::bin_index(axis.coordinate(city), lower, bin_width);
            *totals.entry(bin).or_default() += population;
        }
        if skipped > 0 {
            warn!("{skipped} cities without population were not binned");
        }
        debug!(
            "Grouped {} cities into {} {axis} bins",
            cities.len(),
            totals.len()
        );

        let bins = totals
            .into_iter()
            .filter(|(_, population)| *population > 0)
            .map(|(idx, population)| PopulationBin {
                edge: Self::bin_edge(lower, idx, bin_width),
                population,
            })
            .collect();

        Ok(Self {
            axis,
            bin_width,
            bins,
        })
    }

    /// The index of the right-closed bin containing `coordinate`. The lower bound goes into the
    /// first bin.
    fn bin_index(coordinate: f64, lower: f64, bin_width: f64) -> u64 {
        let position = ((coordinate - lower) / bin_width).ceil();
        if position <= 0.0 {
            0
        } else {
            position as u64 - 1
        }
    }

    /// The left edge of a bin, rounded to six decimals more than the bin width to remove the
    /// noise of the multiplication (0.2 instead of 0.20000000000000284).
    fn bin_edge(lower: f64, index: u64, bin_width: f64) -> f64 {
        let edge = lower + index as f64 * bin_width;
        let decimals = (6.0 - bin_width.log10().floor()).clamp(6.0, 15.0) as i32;
        let scale = 10_f64.powi(decimals);
        (edge * scale).round() / scale
    }

    /// The binned coordinate.
    ///
    /// return: `BinAxis`
    pub fn axis(&self) -> BinAxis {
        self.axis
    }

    /// The bin width in degrees.
    ///
    /// return: `f64`
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// The bins with population, sorted by edge.
    ///
    /// return: `&[PopulationBin]`
    pub fn bins(&self) -> &[PopulationBin] {
        &self.bins
    }

    /// The total population.
    ///
    /// return: `u64`
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.population).sum()
    }

    /// The average population per bin with population.
    ///
    /// return: `Option<f64>`. `None` when there are no bins.
    pub fn mean(&self) -> Option<f64> {
        if self.bins.is_empty() {
            return None;
        }
        Some(self.total() as f64 / self.bins.len() as f64)
    }

    /// The `n` most populated bins, the largest first. Bins with the same population are sorted
    /// by edge.
    ///
    /// # Arguments
    ///
    /// * `n`: The number of bins.
    ///
    /// returns: `Vec<PopulationBin>`
    pub fn top(&self, n: usize) -> Vec<PopulationBin> {
        let mut bins = self.bins.clone();
        bins.sort_by_key(|b| Reverse(b.population));
        bins.truncate(n);
        bins
    }

    /// The total population in the bins whose edge is between `lower` and `upper` (both
    /// included).
    ///
    /// # Arguments
    ///
    /// * `lower`: The lower edge.
    /// * `upper`: The upper edge.
    ///
    /// returns: `u64`
    pub fn sum_between(&self, lower: f64, upper: f64) -> u64 {
        self.sum_where(|edge| edge >= lower && edge <= upper)
    }

    /// The total population in the bins whose edge matches a predicate.
    ///
    /// # Arguments
    ///
    /// * `predicate`: The function receiving the bin edge.
    ///
    /// returns: `u64`
    pub fn sum_where<F: Fn(f64) -> bool>(&self, predicate: F) -> u64 {
        self.bins
            .iter()
            .filter(|b| predicate(b.edge))
            .map(|b| b.population)
            .sum()
    }

    /// The bin label (`45°N` for latitudes, `+120°` for longitudes).
    ///
    /// # Arguments
    ///
    /// * `bin`: The bin.
    ///
    /// returns: `String`
    pub fn label(&self, bin: &PopulationBin) -> String {
        match self.axis {
            BinAxis::Latitude => format_latitude(bin.edge, 0),
            BinAxis::Longitude => format!("{:+.0}°", bin.edge),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::geo::City;
    use crate::population::{BinAxis, PopulationBin, PopulationHistogram};

    fn city(latitude: f64, longitude: f64, population: Option<u64>) -> City {
        City::new("c", "XX", latitude, longitude, population)
    }

    #[test]
    /// Bins are right-closed, the lowest edge is included in the first bin.
    fn test_bin_edges() {
        let cities = vec![
            city(10.0, 0.0, Some(100)),
            city(10.5, 0.0, Some(10)),
            city(9.2, 0.0, Some(1)),
            city(-90.0, 0.0, Some(7)),
            city(-89.5, 0.0, Some(3)),
            city(90.0, 0.0, Some(5)),
        ];
        let h = PopulationHistogram::by_latitude(&cities, None).unwrap();
        assert_eq!(
            h.bins(),
            &[
                PopulationBin {
                    edge: -90.0,
                    population: 10
                },
                PopulationBin {
                    edge: 9.0,
                    population: 101
                },
                PopulationBin {
                    edge: 10.0,
                    population: 10
                },
                PopulationBin {
                    edge: 89.0,
                    population: 5
                },
            ]
        );
        assert_eq!(h.total(), 126);
        assert_eq!(h.mean(), Some(31.5));
        assert_eq!(h.axis(), BinAxis::Latitude);
    }

    #[test]
    /// Cities without population do not create bins.
    fn test_empty_bins_dropped() {
        let cities = vec![
            city(45.0, 12.0, Some(0)),
            city(46.0, 13.0, None),
            city(47.5, -12.5, Some(20)),
        ];
        let h = PopulationHistogram::by_longitude(&cities, Some(5.0)).unwrap();
        assert_eq!(h.bins().len(), 1);
        assert_eq!(h.bins()[0].edge, -15.0);
        assert_eq!(h.label(&h.bins()[0]), "-15°");

        let h = PopulationHistogram::by_latitude(&[], None).unwrap();
        assert!(h.bins().is_empty());
        assert_eq!(h.mean(), None);
    }

    #[test]
    fn test_invalid_arguments() {
        let cities = vec![city(45.0, 12.0, Some(1))];
        assert!(PopulationHistogram::by_latitude(&cities, Some(0.0)).is_err());
        assert!(PopulationHistogram::by_latitude(&cities, Some(f64::NAN)).is_err());

        let cities = vec![city(45.0, 200.0, Some(1))];
        let err = PopulationHistogram::by_longitude(&cities, None)
            .unwrap_err()
            .to_string();
        assert!(err.contains("'longitude'"), "{}", err);
    }

    #[test]
    fn test_top_and_sums() {
        let cities = vec![
            city(-30.5, 0.0, Some(300)),
            city(20.5, 0.0, Some(500)),
            city(40.5, 0.0, Some(300)),
            city(70.5, 0.0, Some(50)),
        ];
        let h = PopulationHistogram::by_latitude(&cities, None).unwrap();
        let top: Vec<f64> = h.top(3).iter().map(|b| b.edge).collect();
        assert_eq!(top, vec![20.0, -31.0, 40.0]);
        assert_eq!(h.sum_between(-31.0, 40.0), 1100);
        assert_eq!(h.sum_where(|e| e >= 0.0), 850);
        assert_eq!(h.label(&h.bins()[0]), "31°S");
    }

    #[test]
    /// Edges of fractional bins are exact decimals and can be used as range bounds.
    fn test_fractional_bin_edges() {
        let cities = vec![city(0.3, 0.0, Some(40)), city(-0.05, 0.0, Some(2))];
        let h = PopulationHistogram::by_latitude(&cities, Some(0.1)).unwrap();
        let edges: Vec<f64> = h.bins().iter().map(|b| b.edge).collect();
        assert_eq!(edges, vec![-0.1, 0.2]);
        assert_eq!(h.sum_between(0.0, 0.2), 40);
        assert_eq!(h.sum_between(-0.1, 0.2), 42);
    }
}
