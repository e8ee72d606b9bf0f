use indexmap::IndexMap;

use crate::core::Record;

/// Impurity measure used to score candidate splits.
///
/// Implementations only define the impurity of a label set; the gain of a
/// split falls out of the shared default below.
pub trait SplitCriterion {
    /// Impurity of a non-empty label set. 0 when every label is identical,
    /// growing as classes mix.
    fn impurity(&self, labels: &[&str]) -> f64;

    /// Reduction in impurity achieved by partitioning `records` on
    /// `attribute`: parent impurity minus the size-weighted impurity of each
    /// value group. Never negative.
    fn split_gain(&self, records: &[&Record], attribute: &str, target: &str) -> f64 {
        let parent: Vec<&str> = records.iter().filter_map(|r| r.value(target)).collect();
        debug_assert_eq!(parent.len(), records.len(), "record missing target value");

        let mut groups: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for record in records {
            if let (Some(value), Some(label)) = (record.value(attribute), record.value(target)) {
                groups.entry(value).or_default().push(label);
            }
        }

        let total = parent.len() as f64;
        let weighted: f64 = groups
            .values()
            .map(|labels| (labels.len() as f64 / total) * self.impurity(labels))
            .sum();

        self.impurity(&parent) - weighted
    }
}
