use thiserror::Error;

/// A dataset entry that cannot become a marker. The entry is skipped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataValidationError {
    #[error("record #{index} is malformed: {reason}")]
    Malformed { index: usize, reason: String },
    #[error("record #{index} has no name")]
    MissingName { index: usize },
    #[error("record #{index} ({name}) has no population")]
    MissingPopulation { index: usize, name: String },
    #[error("record #{index} ({name}) has no latlng")]
    MissingCoordinates { index: usize, name: String },
    #[error("record #{index} ({name}) latlng has {len} components, expected 2")]
    MalformedCoordinates {
        index: usize,
        name: String,
        len: usize,
    },
    #[error("record #{index} ({name}) latlng is not finite")]
    NonFiniteCoordinates { index: usize, name: String },
}

#[derive(Debug, Error)]
pub enum GlobeError {
    #[error("dataset is not a JSON array of records: {0}")]
    Dataset(#[from] serde_json::Error),
    #[error("texture decode failed: {0}")]
    Texture(#[from] image::ImageError),
    #[error("invalid value {value:?} for {key}")]
    Config { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, GlobeError>;
