pub use city::{validate_cities, City};
pub use distance::{
    format_latitude, miles_from_north_pole, validate_coordinates, ClimateZone, Hemisphere,
    EARTH_CIRCUMFERENCE_MILES, MILES_PER_DEGREE, POLAR_CIRCLE_LATITUDE, TROPIC_LATITUDE,
};

mod city;
mod distance;
