use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("dataset contains no records")]
    EmptyDataset,

    #[error("no candidate features were given")]
    NoFeatures,

    #[error("record {index} is missing attribute `{attribute}`")]
    MissingAttribute { index: usize, attribute: String },
}
