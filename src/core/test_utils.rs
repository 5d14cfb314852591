use float_cmp::{approx_eq, F64Margin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::Record;

/// Compare two arrays of f64
pub(crate) fn assert_approx_array_eq(calculated_values: &[f64], expected_values: &[f64]) {
    assert_eq!(calculated_values.len(), expected_values.len());
    let margins = F64Margin {
        epsilon: 1e-9,
        ulps: 4,
    };
    for (i, (calculated, expected)) in calculated_values.iter().zip(expected_values).enumerate() {
        if !approx_eq!(f64, *calculated, *expected, margins) {
            panic!(
                r#"assertion failed on item #{i:?}
                    actual: `{calculated:?}`,
                    expected: `{expected:?}`"#,
            )
        }
    }
}

/// Create records from `(primary, value)` pairs. The payload is the record position.
pub(crate) fn records_from_pairs(pairs: &[(f64, f64)]) -> Vec<Record<usize>> {
    pairs
        .iter()
        .enumerate()
        .map(|(idx, (p, v))| Record::new(*p, *v, idx))
        .collect()
}

/// Generate random records with latitude-like primary values and population-like values. Values
/// are rounded so that ties on both attributes happen.
///
/// # Arguments
///
/// * `size`: The number of records.
/// * `seed`: The seed for the random number generator.
///
/// returns: `Vec<Record<usize>>`
pub(crate) fn random_records(size: usize, seed: u64) -> Vec<Record<usize>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..size)
        .map(|idx| {
            let latitude = (rng.gen_range(-90.0..=90.0_f64) * 2.0).round() / 2.0;
            let population = rng.gen_range(0..200) as f64 * 1000.0;
            Record::new(latitude, population, idx)
        })
        .collect()
}
