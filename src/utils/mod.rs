pub use format::{format_population, with_thousands_separator};
pub use vectors::{argsort, Sort};

mod format;
mod vectors;
