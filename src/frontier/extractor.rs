use std::cmp::Reverse;
use std::fmt::{Display, Formatter};

use log::{debug, info};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{check_finite, required_field, Direction, FError, Fields, Record};
use crate::core::{PRIMARY_KEY, VALUE_KEY};

/// How records tying with the last accepted frontier record are handled.
#[derive(Default, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TiePolicy {
    #[default]
    /// Only the first record is kept when two records have the same `primary` and `value`.
    Strict,
    /// Records identical (same `primary` and `value`) to the last accepted record are kept as
    /// well.
    Inclusive,
}

/// Options to configure the [`FrontierExtractor`]. Unset fields use their defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FrontierOptions {
    /// Whether the primary attribute is maximised or minimised. Default to maximised.
    pub primary_direction: Option<Direction>,
    /// Whether the value attribute is maximised or minimised. Default to maximised.
    pub value_direction: Option<Direction>,
    /// How ties are handled. Default to [`TiePolicy::Strict`].
    pub tie_policy: Option<TiePolicy>,
    /// A record is accepted only if its value is better than this threshold. When `None`, any
    /// value is accepted by the first record of the scan. Zero is a valid value and is never used
    /// as implicit threshold.
    pub sentinel: Option<f64>,
}

/// The frontier and where its records come from.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FrontierResults<R> {
    /// The records on the frontier, best `primary` first.
    pub frontier: Vec<R>,
    /// The position in the input collection of each record in `frontier`.
    pub indexes: Vec<usize>,
    /// The number of records in the input collection.
    pub input_size: usize,
}

impl<R> FrontierResults<R> {
    /// The number of records not on the frontier.
    ///
    /// return: `usize`
    pub fn excluded(&self) -> usize {
        self.input_size - self.frontier.len()
    }
}

/// Extract the Pareto frontier (or skyline) of records with two attributes: a `primary`
/// attribute (for example the latitude) and a `value` (for example the population). The frontier
/// contains the records no other record beats on both attributes.
///
/// The records are sorted by `primary` from best to worst and scanned once, keeping the best
/// `value` seen so far; a record enters the frontier only if its value beats it. Records with
/// the same `primary` are scanned from the best `value`, records identical on both attributes keep
/// their input order. The sort costs $O(N log N)$ and the scan $O(N)$.
///
/// The extractor does not own any state: the same configuration can be used for any number of
/// collections.
///
/// # Example
/// ```
///  use northfront::core::Record;
///  use northfront::frontier::FrontierExtractor;
///
///  let records = vec![
///      Record::new(80.0, 100.0, "A"),
///      Record::new(70.0, 500.0, "B"),
///      Record::new(60.0, 300.0, "C"),
///      Record::new(50.0, 900.0, "D"),
///  ];
///  let results = FrontierExtractor::default().extract(&records, "primary", "value").unwrap();
///  assert_eq!(results.indexes, vec![0, 1, 3]);
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FrontierExtractor {
    /// The direction of the primary and value attributes.
    directions: [Direction; 2],
    /// The tie policy.
    tie_policy: TiePolicy,
    /// The threshold in the oriented space (larger is better). `None` accepts any value.
    threshold: Option<f64>,
}

impl Default for FrontierExtractor {
    fn default() -> Self {
        Self {
            directions: [Direction::Maximise, Direction::Maximise],
            tie_policy: TiePolicy::Strict,
            threshold: None,
        }
    }
}

impl FrontierExtractor {
    /// Configure the extractor. This returns an error if the sentinel is not finite.
    ///
    /// # Arguments
    ///
    /// * `options`: The options.
    ///
    /// returns: `Result<FrontierExtractor, FError>`
    pub fn new(options: FrontierOptions) -> Result<Self, FError> {
        let primary_direction = options.primary_direction.unwrap_or_default();
        let value_direction = options.value_direction.unwrap_or_default();

        let threshold = match options.sentinel {
            None => None,
            Some(s) if !s.is_finite() => {
                return Err(FError::InvalidArgument(
                    "sentinel".to_string(),
                    format!("the value ({s}) must be finite. Leave it unset to accept any value"),
                ))
            }
            Some(s) => Some(value_direction.orient(s)),
        };

        Ok(Self {
            directions: [primary_direction, value_direction],
            tie_policy: options.tie_policy.unwrap_or_default(),
            threshold,
        })
    }

    /// The directions of the primary and value attributes.
    ///
    /// return: `[Direction; 2]`
    pub fn directions(&self) -> [Direction; 2] {
        self.directions
    }

    /// The tie policy.
    ///
    /// return: `TiePolicy`
    pub fn tie_policy(&self) -> TiePolicy {
        self.tie_policy
    }

    /// Extract the frontier from records whose attributes are read by name. All records are
    /// validated first: this returns an error if a field is missing or is not finite, and no
    /// partial frontier is returned.
    ///
    /// # Arguments
    ///
    /// * `records`: The records.
    /// * `primary_key`: The name of the primary attribute.
    /// * `value_key`: The name of the value attribute.
    ///
    /// returns: `Result<FrontierResults<R>, FError>`
    pub fn extract<R: Fields + Clone>(
        &self,
        records: &[R],
        primary_key: &str,
        value_key: &str,
    ) -> Result<FrontierResults<R>, FError> {
        let points = records
            .iter()
            .enumerate()
            .map(|(idx, r)| {
                Ok([
                    required_field(r, idx, primary_key)?,
                    required_field(r, idx, value_key)?,
                ])
            })
            .collect::<Result<Vec<[f64; 2]>, FError>>()?;

        Ok(self.collect(records, self.scan(&points)))
    }

    /// Extract the frontier from records whose attributes are read by two accessor functions.
    /// This returns an error if any accessor returns a value that is not finite.
    ///
    /// # Arguments
    ///
    /// * `records`: The records.
    /// * `primary`: The function returning the primary attribute of a record.
    /// * `value`: The function returning the value attribute of a record.
    ///
    /// returns: `Result<FrontierResults<R>, FError>`
    pub fn extract_by<R, P, V>(
        &self,
        records: &[R],
        primary: P,
        value: V,
    ) -> Result<FrontierResults<R>, FError>
    where
        R: Clone,
        P: Fn(&R) -> f64,
        V: Fn(&R) -> f64,
    {
        let points: Vec<[f64; 2]> = records.iter().map(|r| [primary(r), value(r)]).collect();
        let indexes = self.extract_indexes(&points)?;
        Ok(self.collect(records, indexes))
    }

    /// Extract the frontier from `[primary, value]` points. This returns an error if any
    /// coordinate is not finite.
    ///
    /// # Arguments
    ///
    /// * `points`: The points.
    ///
    /// returns: `Result<Vec<usize>, FError>`. The indexes of the points on the frontier, best
    /// `primary` first.
    pub fn extract_indexes(&self, points: &[[f64; 2]]) -> Result<Vec<usize>, FError> {
        for (idx, [p, v]) in points.iter().enumerate() {
            check_finite(*p, idx, PRIMARY_KEY)?;
            check_finite(*v, idx, VALUE_KEY)?;
        }
        Ok(self.scan(points))
    }

    /// Sort and scan points already validated.
    fn scan(&self, points: &[[f64; 2]]) -> Vec<usize> {
        debug!(
            "Scanning {} records with {} primary, {} value and {:?} tie policy",
            points.len(),
            self.directions[0],
            self.directions[1],
            self.tie_policy
        );

        let oriented: Vec<[f64; 2]> = points
            .iter()
            .map(|[p, v]| [self.directions[0].orient(*p), self.directions[1].orient(*v)])
            .collect();

        // best primary first, then best value. OrderedFloat treats -0.0 and 0.0 as equal
        let mut order: Vec<usize> = (0..oriented.len()).collect();
        order.sort_by_key(|idx| {
            let [p, v] = oriented[*idx];
            (Reverse(OrderedFloat(p)), Reverse(OrderedFloat(v)))
        });

        let mut running_max = self.threshold.unwrap_or(f64::NEG_INFINITY);
        let mut last_accepted: Option<[f64; 2]> = None;
        let mut accepted = Vec::new();
        for idx in order {
            let point = oriented[idx];
            let is_better = point[1] > running_max;
            let is_tie = self.tie_policy == TiePolicy::Inclusive
                && last_accepted.is_some_and(|last| last == point);

            if is_better || is_tie {
                debug!("Record #{idx} with {:?} is on the frontier", points[idx]);
                accepted.push(idx);
                running_max = point[1];
                last_accepted = Some(point);
            }
        }

        info!(
            "Found {} records on the frontier out of {}",
            accepted.len(),
            points.len()
        );
        accepted
    }

    /// Clone the accepted records.
    fn collect<R: Clone>(&self, records: &[R], indexes: Vec<usize>) -> FrontierResults<R> {
        FrontierResults {
            frontier: indexes.iter().map(|idx| records[*idx].clone()).collect(),
            indexes,
            input_size: records.len(),
        }
    }
}

impl Display for FrontierExtractor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Frontier with {} primary attribute and {} value ({:?} ties)",
            self.directions[0], self.directions[1], self.tie_policy
        )
    }
}

/// Extract the frontier of records whose primary and value attributes are both maximised. Ties
/// are handled with [`TiePolicy::Strict`].
///
/// # Arguments
///
/// * `records`: The records.
/// * `primary_key`: The name of the primary attribute.
/// * `value_key`: The name of the value attribute.
///
/// returns: `Result<Vec<R>, FError>`. The records on the frontier, best `primary` first.
pub fn extract_frontier<R: Fields + Clone>(
    records: &[R],
    primary_key: &str,
    value_key: &str,
) -> Result<Vec<R>, FError> {
    Ok(FrontierExtractor::default()
        .extract(records, primary_key, value_key)?
        .frontier)
}

/// Extract the frontier of records whose primary and value attributes, returned by two accessor
/// functions, are both maximised.
///
/// # Arguments
///
/// * `records`: The records.
/// * `primary`: The function returning the primary attribute of a record.
/// * `value`: The function returning the value attribute of a record.
///
/// returns: `Result<Vec<R>, FError>`. The records on the frontier, best `primary` first.
pub fn extract_frontier_by<R, P, V>(records: &[R], primary: P, value: V) -> Result<Vec<R>, FError>
where
    R: Clone,
    P: Fn(&R) -> f64,
    V: Fn(&R) -> f64,
{
    Ok(FrontierExtractor::default()
        .extract_by(records, primary, value)?
        .frontier)
}

/// Extract the frontier of typed records, maximising both attributes.
///
/// # Arguments
///
/// * `records`: The records.
///
/// returns: `Result<Vec<Record<P>>, FError>`
pub fn extract_record_frontier<P: Clone>(records: &[Record<P>]) -> Result<Vec<Record<P>>, FError> {
    extract_frontier(records, PRIMARY_KEY, VALUE_KEY)
}
