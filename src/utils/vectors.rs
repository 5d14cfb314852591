/// Define the sort type
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Sort {
    /// Sort values in ascending order
    Ascending,
    /// Sort values in descending order
    Descending,
}

/// Returns the indices that would sort an array. The sort is stable in both directions: equal
/// values keep their original order.
///
/// # Arguments
///
/// * `data`: The vector to sort.
/// * `sort_type`: Specify whether to sort in ascending or descending order.
///
/// returns: `Vec<usize>`. The vector with the indices.
pub fn argsort(data: &[f64], sort_type: Sort) -> Vec<usize> {
    let mut indices = (0..data.len()).collect::<Vec<_>>();
    match sort_type {
        Sort::Ascending => indices.sort_by(|a, b| data[*a].total_cmp(&data[*b])),
        Sort::Descending => indices.sort_by(|a, b| data[*b].total_cmp(&data[*a])),
    }
    indices
}

#[cfg(test)]
mod test {
    use crate::utils::{argsort, Sort};

    #[test]
    fn test_argsort() {
        let vec = vec![99.0, 11.0, 456.2, 19.0, 0.5];

        assert_eq!(argsort(&vec, Sort::Ascending), vec![4, 1, 3, 0, 2]);
        assert_eq!(argsort(&vec, Sort::Descending), vec![2, 0, 3, 1, 4]);
    }

    #[test]
    /// Ties must keep the input order when sorting in descending order too.
    fn test_argsort_stable() {
        let vec = vec![5.0, 7.0, 5.0, 7.0, 1.0];

        assert_eq!(argsort(&vec, Sort::Ascending), vec![4, 0, 2, 1, 3]);
        assert_eq!(argsort(&vec, Sort::Descending), vec![1, 3, 0, 2, 4]);
    }
}
