//! Error types for the cropyield binary

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cropyield_model::{LoadError, ModelError};
use cropyield_sweep::SweepError;
use cropyield_types::FormError;
use serde::Serialize;
use thiserror::Error;

/// A failed predict action: rejected input or a failed model call.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Sweep(#[from] SweepError),
}

/// Binary-level errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model artifact or reference dataset could not be loaded
    #[error("Load failure: {0}")]
    Load(#[from] LoadError),

    /// Invalid input or failed prediction
    #[error("Prediction failed: {0}")]
    Predict(#[from] PredictError),

    /// Server startup error
    #[error("Server error: {0}")]
    Server(String),

    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

/// API-specific errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Form input rejected before any model call
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] FormError),

    /// Request body is not a well-formed form
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Category outside the model's trained vocabulary
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Any other model failure
    #[error("Model error: {0}")]
    Model(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::Form(err) => ApiError::InvalidInput(err),
            PredictError::Sweep(err) => match err.model_error() {
                ModelError::UnknownCategory { field, value } => {
                    ApiError::UnknownCategory(format!("{} {}", field, value))
                }
                other => ApiError::Model(other.to_string()),
            },
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::InvalidInput(_) | ApiError::InvalidBody(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_INPUT")
            }
            ApiError::UnknownCategory(_) => (StatusCode::UNPROCESSABLE_ENTITY, "UNKNOWN_CATEGORY"),
            ApiError::Model(_) => (StatusCode::INTERNAL_SERVER_ERROR, "MODEL_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for binary operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::InvalidInput(FormError::UnknownItem("Quinoa".into()))
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        assert_eq!(
            ApiError::InvalidBody("missing field `area`".into())
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        assert_eq!(
            ApiError::UnknownCategory("item Quinoa".into())
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        assert_eq!(
            ApiError::Model("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_predict_error_mapping() {
        let err: ApiError = PredictError::Sweep(SweepError::Model(ModelError::UnknownCategory {
            field: "area",
            value: "Atlantis".into(),
        }))
        .into();
        assert!(matches!(err, ApiError::UnknownCategory(ref msg) if msg == "area Atlantis"));

        let err: ApiError = PredictError::Sweep(SweepError::Model(ModelError::EmptyBatch)).into();
        assert!(matches!(err, ApiError::Model(_)));
    }

    #[test]
    fn test_cli_error_messages() {
        let err = CliError::from(PredictError::Form(FormError::UnknownItem("Quinoa".into())));
        assert_eq!(err.to_string(), "Prediction failed: unknown item: Quinoa");

        let err = CliError::from(LoadError::EmptyDataset("yield_df.csv".into()));
        assert_eq!(
            err.to_string(),
            "Load failure: reference dataset yield_df.csv has no rows"
        );
    }
}
