mod request;

pub use request::{BuildTreeRequest, CriterionChoice, build_tree, request_schema};
