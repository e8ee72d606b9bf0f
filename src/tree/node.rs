use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A node of a built decision tree.
///
/// The JSON representation is the wire contract consumed by visualization
/// and inference clients and must stay stable:
///
/// ```json
/// { "type": "decision", "attribute": "...", "subtrees": { "value": {...} },
///   "dataCount": 14, "prediction": "..." }
/// { "type": "leaf", "prediction": "...", "count": 4, "total": 4 }
/// ```
///
/// Nodes are created only by [`TreeBuilder`](crate::tree::TreeBuilder) and
/// never mutated afterwards; each child is exclusively owned by its parent.
/// `subtrees` keys are exactly the values of `attribute` observed in the
/// records that reached the node, in first-encountered order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Decision {
        attribute: String,
        subtrees: IndexMap<String, TreeNode>,
        #[serde(rename = "dataCount")]
        data_count: usize,
        /// Majority label among the records that reached this node. Returned
        /// by the classifier when an input carries a branch value that was
        /// never observed during construction.
        prediction: String,
    },
    Leaf {
        prediction: String,
        /// How many records at this node share `prediction`. Equal to
        /// `total` when the node is pure.
        count: usize,
        total: usize,
    },
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// The label this node predicts: a leaf's label, or a decision node's
    /// majority fallback.
    pub fn prediction(&self) -> &str {
        match self {
            TreeNode::Decision { prediction, .. } => prediction,
            TreeNode::Leaf { prediction, .. } => prediction,
        }
    }

    /// Number of training records that reached this node.
    pub fn record_count(&self) -> usize {
        match self {
            TreeNode::Decision { data_count, .. } => *data_count,
            TreeNode::Leaf { total, .. } => *total,
        }
    }

    fn render(&self, f: &mut Formatter<'_>, indent: usize) -> std::fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            TreeNode::Decision {
                attribute,
                subtrees,
                data_count,
                prediction,
            } => {
                writeln!(f, "{pad}[{attribute}] ({data_count} records, fallback: {prediction})")?;
                for (value, child) in subtrees {
                    writeln!(f, "{pad}  = {value}:")?;
                    child.render(f, indent + 2)?;
                }
                Ok(())
            }
            TreeNode::Leaf {
                prediction,
                count,
                total,
            } => writeln!(f, "{pad}{prediction} ({count}/{total})"),
        }
    }
}

impl Display for TreeNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.render(f, 0)
    }
}
