//! # northfront
//!
//! `northfront` finds the Pareto frontier (or skyline) of records with two attributes, for
//! example the largest-northernmost cities: the cities for which no other city is both larger and
//! further north.
//!
//! The crate also includes the computations used to describe where people live and how much
//! light they get:
//! - [`geo`]: distance from the North Pole, hemispheres and climate zones;
//! - [`population`]: population grouped by latitude or longitude bins, with summaries by
//!   hemisphere, climate zone and longitude region;
//! - [`daylight`]: the daylight duration from the solar declination and the sunrise equation.
//!
//! # Example
//! ```
//!  use northfront::frontier::{FrontierExtractor, FrontierReport};
//!  use northfront::geo::City;
//!
//!  let cities = vec![
//!      City::new("Longyearbyen", "SJ", 78.22, 15.64, Some(2_060)),
//!      City::new("Tromso", "NO", 69.65, 18.96, Some(64_448)),
//!      City::new("Bodo", "NO", 67.28, 14.40, Some(40_000)),
//!      City::new("Moscow", "RU", 55.75, 37.62, Some(10_381_222)),
//!  ];
//!  let report = FrontierReport::new(&cities, &FrontierExtractor::default()).unwrap();
//!  assert_eq!(report.cities.len(), 3);
//!  println!("{report}");
//! ```

// lets the derive macros refer to `::northfront` from inside the crate
extern crate self as northfront;

pub mod core;
pub mod daylight;
pub mod frontier;
pub mod geo;
pub mod population;
pub mod utils;
