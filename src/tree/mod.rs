mod builder;
mod classifier;
mod node;
pub mod split_criteria;

pub use builder::TreeBuilder;
pub use classifier::{Classification, TraceStep};
pub use node::TreeNode;
