pub use grid::{DaylightGrid, MAX_GRID_CELLS};
pub use model::{
    day_of_year, daylight_duration, daylight_duration_array, hour_angle, solar_declination,
    MAX_DECLINATION,
};

mod grid;
mod model;
