use std::env;
use std::error::Error;

use log::LevelFilter;

use northfront::frontier::{FrontierExtractor, FrontierOptions, FrontierReport, TiePolicy};
use northfront::geo::City;
use northfront::population::{
    northern_cities, top_by_population, ClimateZoneSummary, HemisphereSummary,
    LongitudeRegionSummary, PopulationHistogram,
};
use northfront::utils::format_population;

/// Find the largest-northernmost cities in a small sample of cities: a city is on the frontier if
/// no other city is both further north and larger. The example also summarises the population by
/// latitude and longitude.
///
/// `cargo run --example pareto_cities`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let cities = sample_cities();

    // Only the populated cities in the northern hemisphere
    let northern = northern_cities(&cities);
    let extractor = FrontierExtractor::new(FrontierOptions {
        tie_policy: Some(TiePolicy::Strict),
        ..FrontierOptions::default()
    })?;
    let report = FrontierReport::new(&northern, &extractor)?;
    println!("{report}");

    println!("Largest northern cities by distance from the North Pole:");
    for city in top_by_population(&northern, 5) {
        println!(
            "  {} ({:.0} mi): {}",
            city.label(),
            city.miles_from_north_pole(),
            format_population(city.population.unwrap_or_default() as f64)
        );
    }
    println!();

    let by_latitude = PopulationHistogram::by_latitude(&cities, None)?;
    println!("Top 5 Most Populated Latitude Degrees:");
    for bin in by_latitude.top(5) {
        println!(
            "  {}: {:.1}M people",
            by_latitude.label(&bin),
            bin.population as f64 / 1e6
        );
    }
    println!();
    println!("{}", HemisphereSummary::new(&by_latitude)?);
    println!("{}", ClimateZoneSummary::new(&by_latitude)?);

    let by_longitude = PopulationHistogram::by_longitude(&cities, None)?;
    println!("{}", LongitudeRegionSummary::new(&by_longitude)?);

    // Export serialised report
    report.save_to_json(&env::temp_dir(), Some("northern_cities"))?;

    Ok(())
}

fn sample_cities() -> Vec<City> {
    vec![
        City::new("Longyearbyen", "SJ", 78.2232, 15.6267, Some(2_060)),
        City::new("Tromso", "NO", 69.6496, 18.957, Some(64_448)),
        City::new("Murmansk", "RU", 68.9792, 33.0925, Some(307_257)),
        City::new("Norilsk", "RU", 69.3535, 88.2027, Some(175_365)),
        City::new("Arkhangelsk", "RU", 64.5401, 40.5433, Some(356_051)),
        City::new("Reykjavik", "IS", 64.1355, -21.8954, Some(118_918)),
        City::new("Helsinki", "FI", 60.1695, 24.9354, Some(558_457)),
        City::new("Saint Petersburg", "RU", 59.9386, 30.3141, Some(5_351_935)),
        City::new("Oslo", "NO", 59.9127, 10.7461, Some(580_000)),
        City::new("Moscow", "RU", 55.7522, 37.6156, Some(10_381_222)),
        City::new("London", "GB", 51.5085, -0.1257, Some(8_961_989)),
        City::new("Tokyo", "JP", 35.6895, 139.6917, Some(8_336_599)),
        City::new("Shanghai", "CN", 31.2222, 121.4581, Some(22_315_474)),
        City::new("Anchorage", "US", 61.2181, -149.9003, Some(291_826)),
        City::new("Chicago", "US", 41.8500, -87.6500, Some(2_720_546)),
        City::new("Mumbai", "IN", 19.0728, 72.8826, Some(12_691_836)),
        City::new("Lagos", "NG", 6.4541, 3.3947, Some(9_000_000)),
        City::new("Jakarta", "ID", -6.2146, 106.8451, Some(8_540_121)),
        City::new("Sao Paulo", "BR", -23.5475, -46.6361, Some(10_021_295)),
        City::new("Sydney", "AU", -33.8679, 151.2073, Some(4_627_345)),
        City::new("Ushuaia", "AR", -54.8, -68.3, Some(63_000)),
        City::new("McMurdo Station", "AQ", -77.846, 166.676, None),
    ]
}
