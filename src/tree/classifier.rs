use crate::core::Record;
use crate::tree::node::TreeNode;

/// One hop of a traversal: the attribute inspected at a decision node and
/// the branch taken, or `None` when the record's value had no matching
/// subtree and the traversal stopped on the node's fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep<'t> {
    pub attribute: &'t str,
    pub branch: Option<&'t str>,
}

/// Outcome of [`TreeNode::classify_with_trace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'t> {
    pub prediction: &'t str,
    /// Decision nodes visited, in order from the root.
    pub path: Vec<TraceStep<'t>>,
    /// True when the traversal could not descend (missing attribute or a
    /// value never observed during construction) and resolved through a
    /// decision node's majority fallback.
    pub used_fallback: bool,
}

impl TreeNode {
    /// Predicts the label for `record` by descending from this node.
    ///
    /// At each decision node the record's value for the node's attribute
    /// selects the subtree. A missing attribute or a value with no subtree
    /// terminates the traversal at once with that node's majority
    /// prediction; this is a defined resolution, not an error. Traversal
    /// never mutates the tree, so any number of callers may classify against
    /// the same tree concurrently.
    pub fn classify(&self, record: &Record) -> &str {
        let mut node = self;
        loop {
            match node {
                TreeNode::Decision {
                    attribute,
                    subtrees,
                    prediction,
                    ..
                } => {
                    let next = record
                        .value(attribute)
                        .and_then(|value| subtrees.get(value));
                    match next {
                        Some(child) => node = child,
                        None => return prediction,
                    }
                }
                TreeNode::Leaf { prediction, .. } => return prediction,
            }
        }
    }

    /// Like [`classify`](Self::classify), but also reports the decision path
    /// for explanation purposes.
    pub fn classify_with_trace(&self, record: &Record) -> Classification<'_> {
        let mut node = self;
        let mut path = Vec::new();
        loop {
            match node {
                TreeNode::Decision {
                    attribute,
                    subtrees,
                    prediction,
                    ..
                } => {
                    let branch = record
                        .value(attribute)
                        .and_then(|value| subtrees.get_key_value(value));
                    match branch {
                        Some((value, child)) => {
                            path.push(TraceStep {
                                attribute,
                                branch: Some(value.as_str()),
                            });
                            node = child;
                        }
                        None => {
                            path.push(TraceStep {
                                attribute,
                                branch: None,
                            });
                            return Classification {
                                prediction,
                                path,
                                used_fallback: true,
                            };
                        }
                    }
                }
                TreeNode::Leaf { prediction, .. } => {
                    return Classification {
                        prediction,
                        path,
                        used_fallback: false,
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::datasets::{play_tennis, record};
    use crate::tree::TreeBuilder;

    fn tennis_tree() -> TreeNode {
        TreeBuilder::new().build(&play_tennis())
    }

    #[test]
    fn descends_to_the_expected_leaf() {
        let tree = tennis_tree();
        let rec = record(&[
            ("Outlook", "Sunny"),
            ("Temp", "Mild"),
            ("Humidity", "Normal"),
            ("Wind", "Weak"),
        ]);
        assert_eq!(tree.classify(&rec), "Yes");

        let rec = record(&[
            ("Outlook", "Rain"),
            ("Temp", "Cool"),
            ("Humidity", "Normal"),
            ("Wind", "Strong"),
        ]);
        assert_eq!(tree.classify(&rec), "No");
    }

    #[test]
    fn unseen_root_value_falls_back_to_root_prediction() {
        let tree = tennis_tree();
        let rec = record(&[
            ("Outlook", "Foggy"),
            ("Temp", "Mild"),
            ("Humidity", "Normal"),
            ("Wind", "Weak"),
        ]);
        // Root majority is Yes (9 of 14).
        assert_eq!(tree.classify(&rec), "Yes");
    }

    #[test]
    fn missing_attribute_falls_back_too() {
        let tree = tennis_tree();
        let rec = record(&[("Temp", "Mild")]);
        assert_eq!(tree.classify(&rec), "Yes");
    }

    #[test]
    fn unseen_value_below_the_root_uses_that_nodes_majority() {
        let tree = tennis_tree();
        // Reaches the Humidity node under Sunny (majority No, 3 of 5),
        // then cannot match the made-up humidity value.
        let rec = record(&[
            ("Outlook", "Sunny"),
            ("Temp", "Mild"),
            ("Humidity", "Damp"),
            ("Wind", "Weak"),
        ]);
        assert_eq!(tree.classify(&rec), "No");
    }

    #[test]
    fn trace_records_the_decision_path() {
        let tree = tennis_tree();
        let rec = record(&[
            ("Outlook", "Rain"),
            ("Temp", "Mild"),
            ("Humidity", "High"),
            ("Wind", "Weak"),
        ]);
        let result = tree.classify_with_trace(&rec);
        assert_eq!(result.prediction, "Yes");
        assert!(!result.used_fallback);
        assert_eq!(
            result.path,
            vec![
                TraceStep {
                    attribute: "Outlook",
                    branch: Some("Rain")
                },
                TraceStep {
                    attribute: "Wind",
                    branch: Some("Weak")
                },
            ]
        );
    }

    #[test]
    fn trace_marks_the_fallback_step() {
        let tree = tennis_tree();
        let rec = record(&[
            ("Outlook", "Foggy"),
            ("Temp", "Mild"),
            ("Humidity", "Normal"),
            ("Wind", "Weak"),
        ]);
        let result = tree.classify_with_trace(&rec);
        assert!(result.used_fallback);
        assert_eq!(
            result.path,
            vec![TraceStep {
                attribute: "Outlook",
                branch: None
            }]
        );
    }

    #[test]
    fn classifying_a_leaf_tree_returns_its_label() {
        let tree = TreeNode::Leaf {
            prediction: "Yes".to_string(),
            count: 3,
            total: 3,
        };
        let rec = record(&[("Anything", "AtAll")]);
        assert_eq!(tree.classify(&rec), "Yes");
        let result = tree.classify_with_trace(&rec);
        assert!(result.path.is_empty());
        assert!(!result.used_fallback);
    }
}
