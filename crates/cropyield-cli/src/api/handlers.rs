//! Request handlers

use crate::context::{AppContext, PredictionView};
use crate::error::ApiResult;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use cropyield_types::{FormOptions, InputForm};
use serde::Serialize;
use tracing::debug;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
    pub model: String,
}

/// Health check endpoint
pub async fn health_check(State(ctx): State<AppContext>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: ctx.version.clone(),
        uptime: ctx.uptime(),
        model: ctx.predictor.model_name().to_string(),
    })
}

/// Items, areas and numeric defaults for building the form
pub async fn form_options(State(ctx): State<AppContext>) -> Json<FormOptions> {
    Json(ctx.options().clone())
}

/// Predict and sweep for one submitted form
pub async fn predict(
    State(ctx): State<AppContext>,
    body: Result<Json<InputForm>, JsonRejection>,
) -> ApiResult<Json<PredictionView>> {
    let Json(form) = body?;
    debug!(item = %form.item, area = %form.area, "Predict request");
    Ok(Json(ctx.predict(&form)?))
}
