mod entropy_split_criterion;
mod gini_split_criterion;
mod split_criterion;

pub use entropy_split_criterion::{EntropySplitCriterion, entropy, information_gain};
pub use gini_split_criterion::GiniSplitCriterion;
pub use split_criterion::SplitCriterion;
