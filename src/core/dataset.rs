use crate::core::error::DatasetError;
use crate::core::record::Record;

/// A validated training table: an ordered sequence of records, the candidate
/// feature names (order matters for tie-breaking during tree construction)
/// and the target attribute holding the class label.
///
/// Validation happens once, here. Every record is guaranteed to carry the
/// target and every listed feature, so downstream code never re-checks.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    features: Vec<String>,
    target: String,
}

impl Dataset {
    /// Builds a dataset from raw parts.
    ///
    /// Fails when `records` is empty, `features` is empty, or any record
    /// lacks the target attribute or one of the listed features. The error
    /// names the first offending record.
    pub fn new(
        records: Vec<Record>,
        features: Vec<String>,
        target: impl Into<String>,
    ) -> Result<Self, DatasetError> {
        let target = target.into();

        if records.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }
        if features.is_empty() {
            return Err(DatasetError::NoFeatures);
        }

        for (index, record) in records.iter().enumerate() {
            if !record.contains(&target) {
                return Err(DatasetError::MissingAttribute {
                    index,
                    attribute: target.clone(),
                });
            }
            for feature in &features {
                if !record.contains(feature) {
                    return Err(DatasetError::MissingAttribute {
                        index,
                        attribute: feature.clone(),
                    });
                }
            }
        }

        Ok(Self {
            records,
            features,
            target,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
