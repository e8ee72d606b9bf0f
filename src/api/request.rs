use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

use crate::core::{Dataset, DatasetError, Record};
use crate::tree::split_criteria::{EntropySplitCriterion, GiniSplitCriterion, SplitCriterion};
use crate::tree::{TreeBuilder, TreeNode};

/// Which impurity measure drives attribute selection.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    EnumMessage,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CriterionChoice {
    #[default]
    #[strum(
        message = "Entropy (ID3)",
        detailed_message = "Split on the attribute with the highest information gain."
    )]
    Entropy,
    #[strum(
        message = "Gini (CART)",
        detailed_message = "Split on the attribute with the largest Gini-impurity reduction."
    )]
    Gini,
}

impl From<CriterionChoice> for Box<dyn SplitCriterion> {
    fn from(choice: CriterionChoice) -> Self {
        match choice {
            CriterionChoice::Entropy => Box::new(EntropySplitCriterion),
            CriterionChoice::Gini => Box::new(GiniSplitCriterion),
        }
    }
}

/// Payload of a tree-construction request, as posted by the web front end.
///
/// `dataset` is a non-empty sequence of flat string-to-string records,
/// `target_attribute` names the label column and `attributes` lists the
/// candidate features; their order breaks gain ties, so it is significant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildTreeRequest {
    pub dataset: Vec<IndexMap<String, String>>,
    pub target_attribute: String,
    pub attributes: Vec<String>,
    #[serde(default)]
    pub criterion: CriterionChoice,
}

impl BuildTreeRequest {
    /// Validates the payload into a [`Dataset`].
    pub fn into_dataset(self) -> Result<Dataset, DatasetError> {
        let records: Vec<Record> = self.dataset.into_iter().map(Record::from).collect();
        Dataset::new(records, self.attributes, self.target_attribute)
    }
}

/// Builds a tree from a request. This is the single entry point for the
/// transport layer; a validation error maps to a client error there, and the
/// returned [`TreeNode`] serializes directly as the response body.
pub fn build_tree(request: BuildTreeRequest) -> Result<TreeNode, DatasetError> {
    let criterion = request.criterion;
    let dataset = request.into_dataset()?;
    let builder = TreeBuilder::with_criterion(criterion.into());
    Ok(builder.build(&dataset))
}

/// JSON schema of the request payload, for the transport layer to publish.
pub fn request_schema() -> Schema {
    schema_for!(BuildTreeRequest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tennis_request_json() -> serde_json::Value {
        json!({
            "dataset": [
                { "Outlook": "Sunny", "Wind": "Weak", "Play": "No" },
                { "Outlook": "Sunny", "Wind": "Strong", "Play": "No" },
                { "Outlook": "Overcast", "Wind": "Weak", "Play": "Yes" },
                { "Outlook": "Rain", "Wind": "Weak", "Play": "Yes" },
                { "Outlook": "Rain", "Wind": "Strong", "Play": "No" },
            ],
            "targetAttribute": "Play",
            "attributes": ["Outlook", "Wind"],
        })
    }

    #[test]
    fn parses_camel_case_payloads() {
        let request: BuildTreeRequest = serde_json::from_value(tennis_request_json()).unwrap();
        assert_eq!(request.target_attribute, "Play");
        assert_eq!(request.attributes, vec!["Outlook", "Wind"]);
        assert_eq!(request.dataset.len(), 5);
        assert_eq!(request.criterion, CriterionChoice::Entropy);
    }

    #[test]
    fn criterion_field_is_optional_and_kebab_case() {
        let mut payload = tennis_request_json();
        payload["criterion"] = json!("gini");
        let request: BuildTreeRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(request.criterion, CriterionChoice::Gini);
    }

    #[test]
    fn builds_a_serializable_tree() {
        let request: BuildTreeRequest = serde_json::from_value(tennis_request_json()).unwrap();
        let tree = build_tree(request).unwrap();

        let body = serde_json::to_value(&tree).unwrap();
        assert_eq!(body["type"], "decision");
        assert_eq!(body["attribute"], "Outlook");
        assert_eq!(body["dataCount"], 5);
        assert_eq!(
            body["subtrees"]["Overcast"],
            json!({ "type": "leaf", "prediction": "Yes", "count": 1, "total": 1 })
        );
    }

    #[test]
    fn malformed_payloads_surface_a_dataset_error() {
        let payload = json!({
            "dataset": [{ "Outlook": "Sunny" }],
            "targetAttribute": "Play",
            "attributes": ["Outlook"],
        });
        let request: BuildTreeRequest = serde_json::from_value(payload).unwrap();
        let err = build_tree(request).unwrap_err();
        assert_eq!(
            err,
            DatasetError::MissingAttribute {
                index: 0,
                attribute: "Play".to_string()
            }
        );
    }

    #[test]
    fn schema_names_the_request_fields() {
        let schema = request_schema();
        let root = schema.as_object().unwrap();
        let properties = root.get("properties").unwrap();
        for field in ["dataset", "targetAttribute", "attributes", "criterion"] {
            assert!(properties.get(field).is_some(), "schema missing {field}");
        }
    }
}
