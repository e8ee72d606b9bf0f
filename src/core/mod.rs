mod dataset;
mod error;
mod record;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use record::Record;
