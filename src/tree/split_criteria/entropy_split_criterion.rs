use indexmap::IndexMap;

use crate::core::Record;
use crate::tree::split_criteria::split_criterion::SplitCriterion;

/// Shannon entropy of a non-empty label set, in bits.
///
/// `H = -Σ p·log2(p)` over the distinct values present; only observed
/// values are summed, so no zero-probability term ever appears. A pure set
/// yields exactly 0.
pub fn entropy(labels: &[&str]) -> f64 {
    debug_assert!(!labels.is_empty(), "entropy of an empty label set");

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for &label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    if counts.len() == 1 {
        return 0.0;
    }

    let total = labels.len() as f64;
    -counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * p.log2()
        })
        .sum::<f64>()
}

/// Information gain of splitting `records` on `feature`: the entropy of the
/// target labels minus the size-weighted entropy of each value group.
pub fn information_gain(records: &[&Record], feature: &str, target: &str) -> f64 {
    EntropySplitCriterion.split_gain(records, feature, target)
}

/// Entropy-based splitting (ID3).
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropySplitCriterion;

impl SplitCriterion for EntropySplitCriterion {
    fn impurity(&self, labels: &[&str]) -> f64 {
        entropy(labels)
    }
}
