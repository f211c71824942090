//! Error types for model loading and prediction

use thiserror::Error;

/// Failures raised while predicting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A categorical value was not part of the model's trained vocabulary.
    #[error("unknown {field} category: {value}")]
    UnknownCategory { field: &'static str, value: String },

    /// The model produced a different number of outputs than it was given.
    #[error("model returned {actual} outputs for {expected} records")]
    OutputShape { expected: usize, actual: usize },

    /// The model produced NaN or an infinity.
    #[error("model returned a non-finite output at position {index}")]
    NonFiniteOutput { index: usize },

    /// Predict was called without records.
    #[error("prediction batch is empty")]
    EmptyBatch,
}

/// Failures raised while loading the pipeline artifact or reference dataset.
/// All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pipeline artifact {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse reference dataset {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("invalid pipeline artifact: {0}")]
    InvalidArtifact(String),

    #[error("reference dataset {0} has no rows")]
    EmptyDataset(String),

    #[error("reference dataset {path} has no values in column {column}")]
    MissingValues { path: String, column: &'static str },
}

/// Result type for prediction operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;
