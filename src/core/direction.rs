use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Whether a record attribute should be minimised or maximised when looking for the frontier.
/// Default is maximise.
#[derive(Default, Clone, Copy, Debug, PartialOrd, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    /// Larger values are better.
    Maximise,
    /// Smaller values are better.
    Minimise,
}

impl Direction {
    /// Orient a value so that larger is always better. Minimised values change sign.
    ///
    /// # Arguments
    ///
    /// * `value`: The value to orient.
    ///
    /// returns: `f64`
    pub fn orient(&self, value: f64) -> f64 {
        match self {
            Direction::Maximise => value,
            Direction::Minimise => -value,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Minimise => f.write_str("minimised"),
            Direction::Maximise => f.write_str("maximised"),
        }
    }
}
