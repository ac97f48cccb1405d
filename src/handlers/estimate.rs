use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;

use crate::error::AppError;
use crate::models::EstimateRequest;
use crate::startup::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
}

/// Validates the estimate form and fans the lead out to the configured
/// notification channels. Notification failures are logged, never surfaced;
/// only an unreadable body produces a 500 here.
#[tracing::instrument(skip(state, body))]
pub async fn submit_estimate(
    State(state): State<AppState>,
    body: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::error!(error = %rejection, "Rejected unreadable estimate body");
        AppError::internal("Failed to submit estimate")
    })?;

    let lead = request.validate()?;

    let report = state.dispatcher.dispatch(&lead).await;
    report.log();

    Ok(Json(SubmitResponse {
        message: "Estimate request submitted successfully".to_string(),
    }))
}
