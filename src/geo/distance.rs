use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::{check_finite, FError};

/// The approximated Earth circumference in miles.
pub const EARTH_CIRCUMFERENCE_MILES: f64 = 24_901.0;
/// The miles covered by one degree of latitude.
pub const MILES_PER_DEGREE: f64 = EARTH_CIRCUMFERENCE_MILES / 360.0;
/// The latitude of the Tropic of Cancer (and, with opposite sign, of the Tropic of Capricorn).
pub const TROPIC_LATITUDE: f64 = 23.5;
/// The latitude of the Arctic Circle (and, with opposite sign, of the Antarctic Circle).
pub const POLAR_CIRCLE_LATITUDE: f64 = 66.5;

/// Calculate the distance in miles from the North Pole along a meridian:
///
///  $ d = (90 - \phi) \cdot C / 360 $
///
/// where $\phi$ is the latitude in degrees and $C$ the Earth circumference.
///
/// # Arguments
///
/// * `latitude`: The latitude in degrees.
///
/// returns: `f64`
pub fn miles_from_north_pole(latitude: f64) -> f64 {
    (90.0 - latitude) * MILES_PER_DEGREE
}

/// Check that a latitude is in [-90; 90] and a longitude in [-180; 180].
///
/// # Arguments
///
/// * `index`: The position of the record in its collection. This is used in the error message.
/// * `latitude`: The latitude in degrees.
/// * `longitude`: The longitude in degrees.
///
/// returns: `Result<(), FError>`
pub fn validate_coordinates(index: usize, latitude: f64, longitude: f64) -> Result<(), FError> {
    check_finite(latitude, index, "latitude")?;
    check_finite(longitude, index, "longitude")?;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(FError::InvalidInput(
            index,
            "latitude".to_string(),
            format!("the value ({latitude}) must be between -90 and 90 degrees"),
        ));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(FError::InvalidInput(
            index,
            "longitude".to_string(),
            format!("the value ({longitude}) must be between -180 and 180 degrees"),
        ));
    }
    Ok(())
}

/// The hemisphere of a latitude. The equator belongs to the northern hemisphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Get the hemisphere of a latitude.
    ///
    /// # Arguments
    ///
    /// * `latitude`: The latitude in degrees.
    ///
    /// returns: `Hemisphere`
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    /// The single-letter suffix used for latitudes (`N` or `S`).
    ///
    /// return: `&'static str`
    pub fn suffix(&self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
        }
    }
}

/// Format a latitude as degrees with hemisphere suffix (for example `59.91°N`).
///
/// # Arguments
///
/// * `latitude`: The latitude in degrees.
/// * `decimals`: The number of decimal digits.
///
/// returns: `String`
pub fn format_latitude(latitude: f64, decimals: usize) -> String {
    format!(
        "{:.*}°{}",
        decimals,
        latitude.abs(),
        Hemisphere::from_latitude(latitude).suffix()
    )
}

/// The climate zone of a latitude, delimited by the tropics and the polar circles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateZone {
    /// Between the Tropic of Capricorn and the Tropic of Cancer (both included).
    Tropical,
    /// Between the Tropic of Cancer and the Arctic Circle (both excluded).
    NorthernTemperate,
    /// Between the Antarctic Circle and the Tropic of Capricorn (both excluded).
    SouthernTemperate,
    /// North of the Arctic Circle (included).
    Arctic,
    /// South of the Antarctic Circle (included).
    Antarctic,
}

impl ClimateZone {
    /// All zones from north to south.
    pub const ALL: [ClimateZone; 5] = [
        ClimateZone::Arctic,
        ClimateZone::NorthernTemperate,
        ClimateZone::Tropical,
        ClimateZone::SouthernTemperate,
        ClimateZone::Antarctic,
    ];

    /// Get the climate zone of a latitude.
    ///
    /// # Arguments
    ///
    /// * `latitude`: The latitude in degrees.
    ///
    /// returns: `ClimateZone`
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= POLAR_CIRCLE_LATITUDE {
            ClimateZone::Arctic
        } else if latitude <= -POLAR_CIRCLE_LATITUDE {
            ClimateZone::Antarctic
        } else if latitude > TROPIC_LATITUDE {
            ClimateZone::NorthernTemperate
        } else if latitude < -TROPIC_LATITUDE {
            ClimateZone::SouthernTemperate
        } else {
            ClimateZone::Tropical
        }
    }
}

impl Display for ClimateZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClimateZone::Tropical => f.write_str("Tropical (23.5°S to 23.5°N)"),
            ClimateZone::NorthernTemperate => f.write_str("Northern Temperate (23.5°N to 66.5°N)"),
            ClimateZone::SouthernTemperate => f.write_str("Southern Temperate (23.5°S to 66.5°S)"),
            ClimateZone::Arctic => f.write_str("Arctic (above 66.5°N)"),
            ClimateZone::Antarctic => f.write_str("Antarctic (below 66.5°S)"),
        }
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::geo::{
        format_latitude, miles_from_north_pole, validate_coordinates, ClimateZone, Hemisphere,
        MILES_PER_DEGREE,
    };

    #[test]
    fn test_miles_from_north_pole() {
        assert_eq!(miles_from_north_pole(90.0), 0.0);
        assert_approx_eq!(f64, miles_from_north_pole(0.0), 24_901.0 / 4.0, epsilon = 1e-9);
        assert_approx_eq!(f64, miles_from_north_pole(-90.0), 24_901.0 / 2.0, epsilon = 1e-9);
        // Oslo
        assert_approx_eq!(
            f64,
            miles_from_north_pole(59.91),
            30.09 * MILES_PER_DEGREE,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(0, 90.0, -180.0).is_ok());
        let err = validate_coordinates(4, 90.5, 0.0).unwrap_err().to_string();
        assert!(err.contains("#4 has an invalid 'latitude'"), "{}", err);
        let err = validate_coordinates(2, 10.0, 181.0).unwrap_err().to_string();
        assert!(err.contains("'longitude'"), "{}", err);
        assert!(validate_coordinates(1, f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_hemisphere() {
        assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::North);
        assert_eq!(Hemisphere::from_latitude(-0.1), Hemisphere::South);
        assert_eq!(format_latitude(-33.868, 2), "33.87°S");
        assert_eq!(format_latitude(69.66, 1), "69.7°N");
    }

    #[test]
    fn test_climate_zones() {
        assert_eq!(ClimateZone::from_latitude(23.5), ClimateZone::Tropical);
        assert_eq!(ClimateZone::from_latitude(-23.5), ClimateZone::Tropical);
        assert_eq!(ClimateZone::from_latitude(23.6), ClimateZone::NorthernTemperate);
        assert_eq!(ClimateZone::from_latitude(-40.0), ClimateZone::SouthernTemperate);
        assert_eq!(ClimateZone::from_latitude(66.5), ClimateZone::Arctic);
        assert_eq!(ClimateZone::from_latitude(-66.5), ClimateZone::Antarctic);
    }
}
