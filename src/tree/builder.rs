use indexmap::IndexMap;

use crate::core::{Dataset, Record};
use crate::tree::node::TreeNode;
use crate::tree::split_criteria::{EntropySplitCriterion, SplitCriterion};

/// Recursive top-down tree construction over a validated [`Dataset`].
///
/// The builder picks, at every node, the feature with the highest split gain
/// under its criterion (entropy by default, giving classic ID3), partitions
/// the records by that feature's observed values and recurses with the
/// feature removed from the candidate set. Recursion stops on a pure subset
/// or when no candidate features remain.
///
/// Construction is pure and deterministic: the same dataset always yields a
/// structurally identical tree. Ties on gain go to the feature listed first;
/// ties on majority label go to the label encountered first.
pub struct TreeBuilder {
    criterion: Box<dyn SplitCriterion>,
}

impl TreeBuilder {
    /// An entropy-driven (ID3) builder.
    pub fn new() -> Self {
        Self::with_criterion(Box::new(EntropySplitCriterion))
    }

    pub fn with_criterion(criterion: Box<dyn SplitCriterion>) -> Self {
        Self { criterion }
    }

    /// Builds a fresh tree from the dataset. The result is immutable and
    /// owns every node it contains; a second call builds an entirely new
    /// tree.
    pub fn build(&self, dataset: &Dataset) -> TreeNode {
        let records: Vec<&Record> = dataset.records().iter().collect();
        let features: Vec<&str> = dataset.features().iter().map(String::as_str).collect();
        self.build_node(&records, &features, dataset.target())
    }

    fn build_node(&self, records: &[&Record], features: &[&str], target: &str) -> TreeNode {
        let labels = target_labels(records, target);

        if let Some(label) = single_label(&labels) {
            return TreeNode::Leaf {
                prediction: label.to_string(),
                count: records.len(),
                total: records.len(),
            };
        }

        let (majority, majority_count) = majority_label(&labels);

        if features.is_empty() {
            return TreeNode::Leaf {
                prediction: majority.to_string(),
                count: majority_count,
                total: records.len(),
            };
        }

        let best = self.best_feature(records, features, target);

        let remaining: Vec<&str> = features.iter().copied().filter(|f| *f != best).collect();

        let mut subtrees = IndexMap::new();
        for (value, subset) in partition(records, best) {
            let child = self.build_node(&subset, &remaining, target);
            subtrees.insert(value.to_string(), child);
        }

        TreeNode::Decision {
            attribute: best.to_string(),
            subtrees,
            data_count: records.len(),
            prediction: majority.to_string(),
        }
    }

    /// Highest split gain wins; on a tie the feature earliest in `features`
    /// is kept, making the choice deterministic.
    fn best_feature<'f>(&self, records: &[&Record], features: &[&'f str], target: &str) -> &'f str {
        let mut best = features[0];
        let mut best_gain = self.criterion.split_gain(records, best, target);
        for &feature in &features[1..] {
            let gain = self.criterion.split_gain(records, feature, target);
            if gain > best_gain {
                best = feature;
                best_gain = gain;
            }
        }
        best
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn target_labels<'a>(records: &[&'a Record], target: &str) -> Vec<&'a str> {
    let labels: Vec<&str> = records.iter().filter_map(|r| r.value(target)).collect();
    debug_assert_eq!(labels.len(), records.len(), "record missing target value");
    labels
}

fn single_label<'a>(labels: &[&'a str]) -> Option<&'a str> {
    let first = *labels.first()?;
    labels.iter().all(|&l| l == first).then_some(first)
}

/// Most frequent label and its frequency. Counting preserves first-seen
/// order, so a tie resolves to the label that appears earliest.
fn majority_label<'a>(labels: &[&'a str]) -> (&'a str, usize) {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for &label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut majority = labels[0];
    let mut majority_count = 0;
    for (label, count) in counts {
        if count > majority_count {
            majority = label;
            majority_count = count;
        }
    }
    (majority, majority_count)
}

/// Groups records by their value of `attribute`, keeping both the groups and
/// the records inside each group in encounter order.
fn partition<'a>(records: &[&'a Record], attribute: &str) -> IndexMap<&'a str, Vec<&'a Record>> {
    let mut groups: IndexMap<&str, Vec<&Record>> = IndexMap::new();
    for &record in records {
        if let Some(value) = record.value(attribute) {
            groups.entry(value).or_default().push(record);
        }
    }
    groups
}
