use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single observation: an ordered mapping from attribute name to a
/// categorical value.
///
/// Values are opaque tokens; numeric-looking strings are never parsed,
/// compared or binned. Insertion order is preserved, which keeps
/// serialization and iteration reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Record(IndexMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the value of `attribute`, or `None` if the record does not
    /// carry it.
    pub fn value(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).map(String::as_str)
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.0.contains_key(attribute)
    }

    pub fn set(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.0.insert(attribute.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<IndexMap<String, String>> for Record {
    fn from(fields: IndexMap<String, String>) -> Self {
        Self(fields)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
