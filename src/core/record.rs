use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::Fields;

/// The key used by [`Record`] to expose its primary attribute.
pub const PRIMARY_KEY: &str = "primary";
/// The key used by [`Record`] to expose its value attribute.
pub const VALUE_KEY: &str = "value";

/// A typed record with the two attributes used in the dominance comparison and a payload that is
/// carried along but never interpreted.
///
/// # Example
/// ```
///  use northfront::core::Record;
///
///  let r = Record::new(64.8, 31_000.0, "Fairbanks");
///  println!("{}", r);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Record<P = ()> {
    /// The attribute scanned first (for example the latitude).
    pub primary: f64,
    /// The attribute optimised subject to `primary` (for example the population).
    pub value: f64,
    /// Any data to carry with the record.
    pub payload: P,
}

impl<P> Record<P> {
    /// Create a new record.
    ///
    /// # Arguments
    ///
    /// * `primary`: The primary attribute.
    /// * `value`: The value attribute.
    /// * `payload`: The data to carry with the record.
    ///
    /// returns: `Record<P>`
    pub fn new(primary: f64, value: f64, payload: P) -> Self {
        Self {
            primary,
            value,
            payload,
        }
    }

    /// The two attributes as a point.
    ///
    /// return: `[f64; 2]`
    pub fn point(&self) -> [f64; 2] {
        [self.primary, self.value]
    }
}

impl Record<()> {
    /// Create a record without payload.
    ///
    /// # Arguments
    ///
    /// * `primary`: The primary attribute.
    /// * `value`: The value attribute.
    ///
    /// returns: `Record<()>`
    pub fn bare(primary: f64, value: f64) -> Self {
        Self::new(primary, value, ())
    }
}

impl<P> Fields for Record<P> {
    fn field(&self, key: &str) -> Option<f64> {
        match key {
            PRIMARY_KEY => Some(self.primary),
            VALUE_KEY => Some(self.value),
            _ => None,
        }
    }

    fn field_names(&self) -> Vec<&'static str> {
        vec![PRIMARY_KEY, VALUE_KEY]
    }
}

impl<P: Debug> Display for Record<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Record with primary {} and value {} ({:?})",
            self.primary, self.value, self.payload
        )
    }
}

#[cfg(test)]
mod test {
    use crate::core::{Fields, Record};

    #[test]
    fn test_record_fields() {
        let r = Record::new(70.0, 500.0, "Norilsk");
        assert_eq!(r.field("primary"), Some(70.0));
        assert_eq!(r.field("value"), Some(500.0));
        assert_eq!(r.field("latitude"), None);
        assert_eq!(r.point(), [70.0, 500.0]);
        assert_eq!(
            r.to_string(),
            "Record with primary 70 and value 500 (\"Norilsk\")"
        );
    }
}
