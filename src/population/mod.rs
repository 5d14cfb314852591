pub use histogram::{BinAxis, PopulationBin, PopulationHistogram};
pub use selection::{northern_cities, populated_cities, top_by_population};
pub use summary::{
    ClimateZoneSummary, HemisphereSummary, LongitudeRegion, LongitudeRegionSummary,
};

mod histogram;
mod selection;
mod summary;
