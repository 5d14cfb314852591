use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::FError;
use crate::geo::{ClimateZone, Hemisphere};
use crate::population::{BinAxis, PopulationHistogram};

/// Return an error if the histogram is not binned along `axis`.
fn check_axis(histogram: &PopulationHistogram, axis: BinAxis) -> Result<(), FError> {
    if histogram.axis() != axis {
        return Err(FError::InvalidArgument(
            "histogram".to_string(),
            format!(
                "the population must be binned by {axis}, but it is binned by {}",
                histogram.axis()
            ),
        ));
    }
    Ok(())
}

/// The population in the northern and southern hemispheres.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HemisphereSummary {
    /// The population in the bins at or north of the equator.
    pub north: u64,
    /// The population in the bins south of the equator.
    pub south: u64,
}

impl HemisphereSummary {
    /// Split the population by hemisphere. Bins are assigned using their edge. This returns an
    /// error if the histogram is not binned by latitude.
    ///
    /// # Arguments
    ///
    /// * `histogram`: The population binned by latitude.
    ///
    /// returns: `Result<HemisphereSummary, FError>`
    pub fn new(histogram: &PopulationHistogram) -> Result<Self, FError> {
        check_axis(histogram, BinAxis::Latitude)?;
        Ok(Self {
            north: histogram
                .sum_where(|edge| Hemisphere::from_latitude(edge) == Hemisphere::North),
            south: histogram
                .sum_where(|edge| Hemisphere::from_latitude(edge) == Hemisphere::South),
        })
    }

    /// The percentage of the population living in a hemisphere.
    ///
    /// # Arguments
    ///
    /// * `hemisphere`: The hemisphere.
    ///
    /// returns: `Option<f64>`. `None` if the total population is zero.
    pub fn share(&self, hemisphere: Hemisphere) -> Option<f64> {
        let total = self.north + self.south;
        if total == 0 {
            return None;
        }
        let population = match hemisphere {
            Hemisphere::North => self.north,
            Hemisphere::South => self.south,
        };
        Some(population as f64 / total as f64 * 100.0)
    }
}

impl Display for HemisphereSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Population by Hemisphere:")?;
        for (name, hemisphere, population) in [
            ("Northern", Hemisphere::North, self.north),
            ("Southern", Hemisphere::South, self.south),
        ] {
            writeln!(
                f,
                "  {name} Hemisphere: {:.0}M people ({:.1}%)",
                population as f64 / 1e6,
                self.share(hemisphere).unwrap_or(0.0)
            )?;
        }
        Ok(())
    }
}

/// The population in each climate zone.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClimateZoneSummary {
    /// The zones, from north to south, with their population.
    pub zones: Vec<(ClimateZone, u64)>,
}

impl ClimateZoneSummary {
    /// Split the population by climate zone. Bins are assigned using their edge. This returns an
    /// error if the histogram is not binned by latitude.
    ///
    /// # Arguments
    ///
    /// * `histogram`: The population binned by latitude.
    ///
    /// returns: `Result<ClimateZoneSummary, FError>`
    pub fn new(histogram: &PopulationHistogram) -> Result<Self, FError> {
        check_axis(histogram, BinAxis::Latitude)?;
        let zones = ClimateZone::ALL
            .iter()
            .map(|zone| {
                (
                    *zone,
                    histogram.sum_where(|edge| ClimateZone::from_latitude(edge) == *zone),
                )
            })
            .collect();
        Ok(Self { zones })
    }

    /// The population in a zone.
    ///
    /// # Arguments
    ///
    /// * `zone`: The climate zone.
    ///
    /// returns: `u64`
    pub fn population(&self, zone: ClimateZone) -> u64 {
        self.zones
            .iter()
            .find(|(z, _)| *z == zone)
            .map(|(_, p)| *p)
            .unwrap_or_default()
    }
}

impl Display for ClimateZoneSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Population by Climate Zones:")?;
        for (zone, population) in &self.zones {
            // one decimal for the polar zones only
            let decimals = match zone {
                ClimateZone::Arctic | ClimateZone::Antarctic => 1,
                _ => 0,
            };
            writeln!(
                f,
                "  {zone}: {:.*}M people",
                decimals,
                *population as f64 / 1e6
            )?;
        }
        Ok(())
    }
}

/// A broad longitude region. Regions are not a partition: the 60°E meridian belongs to two
/// regions and some longitudes belong to none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LongitudeRegion {
    /// From 60°E to 140°E.
    AsiaPacific,
    /// From 10°W to 60°E.
    EuropeAfrica,
    /// From 120°W to 60°W.
    Americas,
}

impl LongitudeRegion {
    /// All regions.
    pub const ALL: [LongitudeRegion; 3] = [
        LongitudeRegion::AsiaPacific,
        LongitudeRegion::EuropeAfrica,
        LongitudeRegion::Americas,
    ];

    /// The first and last bin edge of the region (both included).
    ///
    /// return: `(f64, f64)`
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            LongitudeRegion::AsiaPacific => (60.0, 140.0),
            LongitudeRegion::EuropeAfrica => (-10.0, 60.0),
            LongitudeRegion::Americas => (-120.0, -60.0),
        }
    }
}

impl Display for LongitudeRegion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LongitudeRegion::AsiaPacific => f.write_str("Asia/Pacific (60°E to 140°E)"),
            LongitudeRegion::EuropeAfrica => f.write_str("Europe/Africa (-10°E to 60°E)"),
            LongitudeRegion::Americas => f.write_str("Americas (-120°W to -60°W)"),
        }
    }
}

/// The population in each longitude region.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LongitudeRegionSummary {
    /// The regions with their population.
    pub regions: Vec<(LongitudeRegion, u64)>,
}

impl LongitudeRegionSummary {
    /// Sum the population of each region. This returns an error if the histogram is not binned by
    /// longitude.
    ///
    /// # Arguments
    ///
    /// * `histogram`: The population binned by longitude.
    ///
    /// returns: `Result<LongitudeRegionSummary, FError>`
    pub fn new(histogram: &PopulationHistogram) -> Result<Self, FError> {
        check_axis(histogram, BinAxis::Longitude)?;
        let regions = LongitudeRegion::ALL
            .iter()
            .map(|region| {
                let (lower, upper) = region.bounds();
                (*region, histogram.sum_between(lower, upper))
            })
            .collect();
        Ok(Self { regions })
    }
}

impl Display for LongitudeRegionSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Longitude ranges with highest population concentrations:")?;
        for (region, population) in &self.regions {
            writeln!(f, "  {region}: {:.0}M people", *population as f64 / 1e6)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::geo::{City, ClimateZone, Hemisphere};
    use crate::population::{
        ClimateZoneSummary, HemisphereSummary, LongitudeRegion, LongitudeRegionSummary,
        PopulationHistogram,
    };

    fn cities() -> Vec<City> {
        vec![
            City::new("Tokyo", "JP", 35.69, 139.69, Some(8_000_000)),
            City::new("Jakarta", "ID", -6.21, 106.85, Some(9_000_000)),
            City::new("Lagos", "NG", 6.45, 3.39, Some(9_000_000)),
            City::new("Sao Paulo", "BR", -23.55, -46.63, Some(10_000_000)),
            City::new("Norilsk", "RU", 69.35, 88.2, Some(1_000_000)),
            City::new("Chicago", "US", 41.85, -87.65, Some(3_000_000)),
        ]
    }

    #[test]
    fn test_hemisphere_summary() {
        let h = PopulationHistogram::by_latitude(&cities(), None).unwrap();
        let summary = HemisphereSummary::new(&h).unwrap();
        assert_eq!(summary.north, 21_000_000);
        assert_eq!(summary.south, 19_000_000);
        assert_approx_eq!(
            f64,
            summary.share(Hemisphere::North).unwrap(),
            52.5,
            epsilon = 1e-9
        );
        assert!(summary
            .to_string()
            .contains("Northern Hemisphere: 21M people (52.5%)"));
    }

    #[test]
    fn test_climate_zone_summary() {
        let h = PopulationHistogram::by_latitude(&cities(), None).unwrap();
        let summary = ClimateZoneSummary::new(&h).unwrap();
        // Jakarta's bin edge is -7 and Sao Paulo's is -24
        assert_eq!(summary.population(ClimateZone::Tropical), 18_000_000);
        assert_eq!(summary.population(ClimateZone::SouthernTemperate), 10_000_000);
        assert_eq!(summary.population(ClimateZone::NorthernTemperate), 11_000_000);
        assert_eq!(summary.population(ClimateZone::Arctic), 1_000_000);
        assert_eq!(summary.population(ClimateZone::Antarctic), 0);
        let text = summary.to_string();
        assert!(text.contains("Arctic (above 66.5°N): 1.0M people"), "{}", text);
        assert!(text.contains("Tropical (23.5°S to 23.5°N): 18M people"), "{}", text);
        assert!(text.contains("Northern Temperate (23.5°N to 66.5°N): 11M people"));
        assert!(text.contains("Antarctic (below 66.5°S): 0.0M people"));
    }

    #[test]
    fn test_longitude_summary() {
        let h = PopulationHistogram::by_longitude(&cities(), None).unwrap();
        let summary = LongitudeRegionSummary::new(&h).unwrap();
        assert_eq!(
            summary.regions,
            vec![
                (LongitudeRegion::AsiaPacific, 18_000_000),
                (LongitudeRegion::EuropeAfrica, 9_000_000),
                (LongitudeRegion::Americas, 3_000_000),
            ]
        );

        // wrong axis
        let err = HemisphereSummary::new(&h).unwrap_err().to_string();
        assert!(err.contains("binned by latitude"), "{}", err);
        let h = PopulationHistogram::by_latitude(&cities(), None).unwrap();
        assert!(LongitudeRegionSummary::new(&h).is_err());
    }
}
