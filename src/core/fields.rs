use crate::core::FError;

/// A record exposing named numeric fields. This is how the frontier extractor reads the two
/// attributes to compare when they are identified by name.
///
/// The trait can be derived on structs with named fields using `#[derive(Fields)]`: numeric
/// fields and `Option`s of numeric fields become available under their name.
///
/// # Example
/// ```
///  use northfront::core::Fields;
///
///  #[derive(Fields)]
///  struct Station {
///      #[fields(rename = "lat")]
///      latitude: f64,
///      visitors: Option<u64>,
///      name: String,
///  }
///
///  let s = Station { latitude: 78.2, visitors: None, name: "Ny-Alesund".to_string() };
///  assert_eq!(s.field("lat"), Some(78.2));
///  assert_eq!(s.field("visitors"), None);
///  assert_eq!(s.field("name"), None);
/// ```
pub trait Fields {
    /// Get the value of a numeric field.
    ///
    /// # Arguments
    ///
    /// * `key`: The field name.
    ///
    /// returns: `Option<f64>`. `None` if the field does not exist or its value is missing.
    fn field(&self, key: &str) -> Option<f64>;

    /// The names of the fields that can be read with [`Fields::field`].
    ///
    /// return: `Vec<&'static str>`
    fn field_names(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

/// Read a field that must be set and be finite.
///
/// # Arguments
///
/// * `record`: The record.
/// * `index`: The record position in its collection. This is only used in the error message.
/// * `key`: The field name.
///
/// returns: `Result<f64, FError>`
pub fn required_field<R: Fields + ?Sized>(
    record: &R,
    index: usize,
    key: &str,
) -> Result<f64, FError> {
    let value = record.field(key).ok_or_else(|| {
        let names = record.field_names();
        let reason = if names.is_empty() || names.contains(&key) {
            "the value is missing".to_string()
        } else {
            format!("the field does not exist. Available fields are: {}", names.join(", "))
        };
        FError::InvalidInput(index, key.to_string(), reason)
    })?;
    check_finite(value, index, key)
}

/// Return an error if a value is NaN or infinite.
///
/// # Arguments
///
/// * `value`: The value to check.
/// * `index`: The record position in its collection.
/// * `key`: The field name.
///
/// returns: `Result<f64, FError>`
pub fn check_finite(value: f64, index: usize, key: &str) -> Result<f64, FError> {
    if value.is_nan() {
        return Err(FError::InvalidInput(
            index,
            key.to_string(),
            "the value is NaN".to_string(),
        ));
    }
    if value.is_infinite() {
        return Err(FError::InvalidInput(
            index,
            key.to_string(),
            format!("the value ({value}) is not finite"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod test {
    use crate::core::fields::{check_finite, required_field};
    use crate::core::Fields;

    struct Pair {
        a: f64,
        b: Option<f64>,
    }

    impl Fields for Pair {
        fn field(&self, key: &str) -> Option<f64> {
            match key {
                "a" => Some(self.a),
                "b" => self.b,
                _ => None,
            }
        }

        fn field_names(&self) -> Vec<&'static str> {
            vec!["a", "b"]
        }
    }

    #[test]
    fn test_required_field() {
        let p = Pair { a: 1.5, b: None };
        assert_eq!(required_field(&p, 0, "a").unwrap(), 1.5);

        let err = required_field(&p, 3, "b").unwrap_err().to_string();
        assert_eq!(err, "The record #3 has an invalid 'b' field: the value is missing");

        let err = required_field(&p, 3, "c").unwrap_err().to_string();
        assert!(err.contains("Available fields are: a, b"), "{}", err);
    }

    #[test]
    fn test_non_finite_values() {
        assert!(check_finite(f64::NAN, 1, "x")
            .unwrap_err()
            .to_string()
            .contains("NaN"));
        assert!(check_finite(f64::NEG_INFINITY, 1, "x")
            .unwrap_err()
            .to_string()
            .contains("not finite"));
        assert_eq!(check_finite(0.0, 1, "x").unwrap(), 0.0);
    }
}
