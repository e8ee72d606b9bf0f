use indexmap::IndexMap;

use crate::tree::split_criteria::split_criterion::SplitCriterion;

/// Gini-impurity splitting (CART-style classification): `1 - Σ p²` over the
/// distinct labels present.
#[derive(Debug, Clone, Copy, Default)]
pub struct GiniSplitCriterion;

impl SplitCriterion for GiniSplitCriterion {
    fn impurity(&self, labels: &[&str]) -> f64 {
        debug_assert!(!labels.is_empty(), "gini of an empty label set");

        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for &label in labels {
            *counts.entry(label).or_insert(0) += 1;
        }

        let total = labels.len() as f64;
        let mut gini = 1.0;
        for &count in counts.values() {
            let rel_freq = count as f64 / total;
            gini -= rel_freq * rel_freq;
        }
        gini
    }
}
