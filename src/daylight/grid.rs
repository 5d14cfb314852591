use chrono::NaiveDate;
use log::debug;
use nalgebra::DMatrix;

use crate::core::FError;
use crate::daylight::daylight_duration_array;

/// The maximum number of cells in a [`DaylightGrid`].
pub const MAX_GRID_CELLS: usize = 10_000_000;

/// The daylight duration on a regular latitude/longitude grid for one date. The duration only
/// depends on the latitude, therefore each matrix row holds the same value.
#[derive(Debug, Clone)]
pub struct DaylightGrid {
    /// The date.
    date: NaiveDate,
    /// The latitudes from -90 to 90 degrees (matrix rows).
    latitudes: Vec<f64>,
    /// The longitudes from -180 to 180 degrees (matrix columns).
    longitudes: Vec<f64>,
    /// The daylight durations in hours with size (latitudes, longitudes).
    durations: DMatrix<f64>,
}

impl DaylightGrid {
    /// Calculate the daylight grid. This returns an error if a resolution is not a finite number
    /// larger than zero.
    ///
    /// # Arguments
    ///
    /// * `date`: The date.
    /// * `lat_resolution`: The latitude step in degrees. Default to 1 degree.
    /// * `lon_resolution`: The longitude step in degrees. Default to 1 degree.
    ///
    /// returns: `Result<DaylightGrid, FError>`
    pub fn new(
        date: NaiveDate,
        lat_resolution: Option<f64>,
        lon_resolution: Option<f64>,
    ) -> Result<Self, FError> {
        let latitudes = Self::axis("lat_resolution", -90.0, 90.0, lat_resolution)?;
        let longitudes = Self::axis("lon_resolution", -180.0, 180.0, lon_resolution)?;
        let cells = latitudes
            .len()
            .checked_mul(longitudes.len())
            .filter(|c| *c <= MAX_GRID_CELLS)
            .ok_or_else(|| {
                FError::InvalidArgument(
                    "lon_resolution".to_string(),
                    format!(
                        "the grid with {} latitudes and {} longitudes exceeds {MAX_GRID_CELLS} cells",
                        latitudes.len(),
                        longitudes.len()
                    ),
                )
            })?;
        let per_latitude = daylight_duration_array(&latitudes, &date, Some(true));

        debug!(
            "Creating daylight grid with {} latitudes and {} longitudes ({cells} cells)",
            latitudes.len(),
            longitudes.len()
        );
        let durations =
            DMatrix::from_fn(latitudes.len(), longitudes.len(), |r, _| per_latitude[r]);

        Ok(Self {
            date,
            latitudes,
            longitudes,
            durations,
        })
    }

    /// Build the coordinates from `start` to `end` (included when reached by the step).
    fn axis(name: &str, start: f64, end: f64, step: Option<f64>) -> Result<Vec<f64>, FError> {
        let step = step.unwrap_or(1.0);
        if !step.is_finite() || step <= 0.0 {
            return Err(FError::InvalidArgument(
                name.to_string(),
                format!("the resolution ({step}) must be a finite number larger than zero"),
            ));
        }
        // tolerance on the last step to include `end` despite rounding errors
        let steps = ((end - start) / step + 1e-9).floor();
        if !steps.is_finite() || steps >= MAX_GRID_CELLS as f64 {
            return Err(FError::InvalidArgument(
                name.to_string(),
                format!("the resolution ({step}) is too fine, the grid exceeds {MAX_GRID_CELLS} cells"),
            ));
        }
        let size = steps as usize + 1;
        Ok((0..size).map(|i| start + i as f64 * step).collect())
    }

    /// The date.
    ///
    /// return: `NaiveDate`
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The latitudes of the matrix rows.
    ///
    /// return: `&[f64]`
    pub fn latitudes(&self) -> &[f64] {
        &self.latitudes
    }

    /// The longitudes of the matrix columns.
    ///
    /// return: `&[f64]`
    pub fn longitudes(&self) -> &[f64] {
        &self.longitudes
    }

    /// The daylight durations in hours.
    ///
    /// return: `&DMatrix<f64>`
    pub fn durations(&self) -> &DMatrix<f64> {
        &self.durations
    }

    /// The latitude and longitude matrices with the coordinates of each grid cell.
    ///
    /// return: `(DMatrix<f64>, DMatrix<f64>)`
    pub fn meshgrid(&self) -> (DMatrix<f64>, DMatrix<f64>) {
        let (rows, cols) = self.durations.shape();
        (
            DMatrix::from_fn(rows, cols, |r, _| self.latitudes[r]),
            DMatrix::from_fn(rows, cols, |_, c| self.longitudes[c]),
        )
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use crate::daylight::{daylight_duration, DaylightGrid};

    #[test]
    fn test_grid_shape() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let grid = DaylightGrid::new(date, Some(5.0), Some(10.0)).unwrap();

        // -90 to 90 with step 5 and -180 to 180 with step 10
        assert_eq!(grid.durations().shape(), (37, 37));
        assert_eq!(grid.latitudes().first(), Some(&-90.0));
        assert_eq!(grid.latitudes().last(), Some(&90.0));
        assert_eq!(grid.longitudes().last(), Some(&180.0));

        let (lat, lon) = grid.meshgrid();
        assert_eq!(lat.shape(), (37, 37));
        assert_eq!(lon[(3, 2)], -160.0);
        assert_eq!(lat[(3, 2)], -75.0);

        let grid = DaylightGrid::new(date, None, None).unwrap();
        assert_eq!(grid.durations().shape(), (181, 361));
    }

    #[test]
    /// The duration only changes with the latitude.
    fn test_grid_values() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let grid = DaylightGrid::new(date, Some(10.0), Some(10.0)).unwrap();

        for (r, row) in grid.durations().row_iter().enumerate() {
            let expected = daylight_duration(grid.latitudes()[r], &date);
            assert!(row.iter().all(|d| *d == expected));
        }
        assert_eq!(grid.date(), date);
    }

    #[test]
    fn test_invalid_resolution() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let err = DaylightGrid::new(date, Some(0.0), None)
            .unwrap_err()
            .to_string();
        assert!(err.contains("'lat_resolution'"), "{}", err);
        assert!(DaylightGrid::new(date, None, Some(-1.0)).is_err());
    }

    #[test]
    /// Tiny resolutions are rejected instead of overflowing the axis size.
    fn test_resolution_too_fine() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let err = DaylightGrid::new(date, Some(1e-300), Some(1.0))
            .unwrap_err()
            .to_string();
        assert!(err.contains("'lat_resolution'"), "{}", err);
        assert!(DaylightGrid::new(date, Some(1.0), Some(f64::MIN_POSITIVE)).is_err());

        // both axes are small but the grid is too large
        let err = DaylightGrid::new(date, Some(1e-3), Some(1e-3))
            .unwrap_err()
            .to_string();
        assert!(err.contains("'lon_resolution'"), "{}", err);
    }
}
