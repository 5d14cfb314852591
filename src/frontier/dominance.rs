use crate::core::Direction;

/// The preferred point when two points are compared by [`ParetoDominance`].
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy)]
pub enum PreferredSolution {
    /// The first point is preferred.
    First,
    /// The second point is preferred.
    Second,
    /// The two points are mutually preferred.
    MutuallyPreferred,
}

/// This assesses the Pareto dominance between two points $P_1$ and $P_2$ with two attributes.
/// $P_1$ dominates $P_2$ if it is at least as good as $P_2$ on both attributes and strictly
/// better on at least one of them. "Better" depends on the [`Direction`] of each attribute.
pub struct ParetoDominance;

impl ParetoDominance {
    /// Get the dominance relation between two points.
    ///
    /// # Arguments
    ///
    /// * `first`: The first point to compare.
    /// * `second`: The second point to compare.
    /// * `directions`: Whether each attribute is maximised or minimised.
    ///
    /// returns: `PreferredSolution` The dominance relation between point 1 and 2.
    pub fn compare(
        first: &[f64; 2],
        second: &[f64; 2],
        directions: &[Direction; 2],
    ) -> PreferredSolution {
        let mut relation = PreferredSolution::MutuallyPreferred;
        for ((v1, v2), direction) in first.iter().zip(second).zip(directions) {
            // larger is better after orienting the values
            let v1 = direction.orient(*v1);
            let v2 = direction.orient(*v2);

            if v1 > v2 {
                if relation == PreferredSolution::Second {
                    return PreferredSolution::MutuallyPreferred;
                }
                relation = PreferredSolution::First;
            } else if v1 < v2 {
                if relation == PreferredSolution::First {
                    return PreferredSolution::MutuallyPreferred;
                }
                relation = PreferredSolution::Second;
            }
        }
        relation
    }

    /// Whether `first` Pareto-dominates `second`.
    ///
    /// # Arguments
    ///
    /// * `first`: The first point.
    /// * `second`: The second point.
    /// * `directions`: Whether each attribute is maximised or minimised.
    ///
    /// returns: `bool`
    pub fn dominates(first: &[f64; 2], second: &[f64; 2], directions: &[Direction; 2]) -> bool {
        Self::compare(first, second, directions) == PreferredSolution::First
    }

    /// Whether `first` is at least as good as `second` on both attributes. Unlike
    /// [`ParetoDominance::dominates`], identical points weakly dominate each other.
    ///
    /// # Arguments
    ///
    /// * `first`: The first point.
    /// * `second`: The second point.
    /// * `directions`: Whether each attribute is maximised or minimised.
    ///
    /// returns: `bool`
    pub fn weakly_dominates(
        first: &[f64; 2],
        second: &[f64; 2],
        directions: &[Direction; 2],
    ) -> bool {
        first
            .iter()
            .zip(second)
            .zip(directions)
            .all(|((v1, v2), d)| d.orient(*v1) >= d.orient(*v2))
    }
}

/// Find a frontier point that weakly dominates `point`.
///
/// # Arguments
///
/// * `point`: The point to check.
/// * `frontier`: The frontier points.
/// * `directions`: Whether each attribute is maximised or minimised.
///
/// returns: `Option<usize>`. The index in `frontier` of the first point weakly dominating
/// `point`, if any.
pub fn find_dominator(
    point: &[f64; 2],
    frontier: &[[f64; 2]],
    directions: &[Direction; 2],
) -> Option<usize> {
    frontier
        .iter()
        .position(|f| ParetoDominance::weakly_dominates(f, point, directions))
}

#[cfg(test)]
mod test {
    use crate::core::Direction;
    use crate::frontier::{find_dominator, ParetoDominance, PreferredSolution};

    const MAX_MAX: [Direction; 2] = [Direction::Maximise, Direction::Maximise];

    #[test]
    fn test_maximised_attributes() {
        assert_eq!(
            ParetoDominance::compare(&[70.0, 500.0], &[60.0, 300.0], &MAX_MAX),
            PreferredSolution::First
        );
        assert_eq!(
            ParetoDominance::compare(&[60.0, 300.0], &[70.0, 500.0], &MAX_MAX),
            PreferredSolution::Second
        );
        // better on one attribute only
        assert_eq!(
            ParetoDominance::compare(&[80.0, 100.0], &[70.0, 500.0], &MAX_MAX),
            PreferredSolution::MutuallyPreferred
        );
        // identical points
        assert_eq!(
            ParetoDominance::compare(&[80.0, 100.0], &[80.0, 100.0], &MAX_MAX),
            PreferredSolution::MutuallyPreferred
        );
        // equal on one attribute, better on the other
        assert!(ParetoDominance::dominates(
            &[80.0, 200.0],
            &[80.0, 100.0],
            &MAX_MAX
        ));
    }

    #[test]
    /// The first attribute is a distance from the pole and is minimised.
    fn test_minimised_primary() {
        let directions = [Direction::Minimise, Direction::Maximise];
        assert!(ParetoDominance::dominates(
            &[1000.0, 500.0],
            &[2000.0, 300.0],
            &directions
        ));
        assert!(!ParetoDominance::dominates(
            &[2000.0, 300.0],
            &[1000.0, 500.0],
            &directions
        ));
    }

    #[test]
    fn test_find_dominator() {
        let frontier = [[80.0, 100.0], [70.0, 500.0], [50.0, 900.0]];
        assert_eq!(find_dominator(&[60.0, 300.0], &frontier, &MAX_MAX), Some(1));
        assert_eq!(find_dominator(&[80.0, 100.0], &frontier, &MAX_MAX), Some(0));
        assert_eq!(find_dominator(&[85.0, 50.0], &frontier, &MAX_MAX), None);
    }
}
