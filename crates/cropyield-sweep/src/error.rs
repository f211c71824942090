//! Error types for sweep evaluation

use cropyield_model::ModelError;
use thiserror::Error;

/// A failed sweep or analysis. No partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    #[error("prediction failed: {0}")]
    Model(#[from] ModelError),
}

impl SweepError {
    /// The underlying model error.
    pub fn model_error(&self) -> &ModelError {
        match self {
            SweepError::Model(err) => err,
        }
    }
}
