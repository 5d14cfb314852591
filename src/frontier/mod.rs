pub use dominance::{find_dominator, ParetoDominance, PreferredSolution};
pub use extractor::{
    extract_frontier, extract_frontier_by, extract_record_frontier, FrontierExtractor,
    FrontierOptions, FrontierResults, TiePolicy,
};
pub use report::{FrontierCity, FrontierReport};

mod dominance;
mod extractor;
mod report;
