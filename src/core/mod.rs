pub use direction::Direction;
pub use error::FError;
pub use fields::{check_finite, required_field, Fields};
pub use northfront_macros::Fields;
pub use record::{Record, PRIMARY_KEY, VALUE_KEY};

pub mod direction;
pub mod error;
pub mod fields;
pub mod record;
#[cfg(test)]
pub(crate) mod test_utils;
