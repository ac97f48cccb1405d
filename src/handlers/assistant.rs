use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::startup::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default, rename = "recaptchaToken")]
    pub recaptcha_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Answers a free-text question from the canned knowledge base, optionally
/// gated by reCAPTCHA when a secret is configured.
#[tracing::instrument(skip(state, body))]
pub async fn ask_paint_guru(
    State(state): State<AppState>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, AppError> {
    let Json(request) = body.map_err(|rejection| match rejection {
        // A present-but-wrong-type question is a client mistake, not a
        // server fault.
        JsonRejection::JsonDataError(_) => AppError::bad_request("Question is required"),
        rejection => {
            tracing::error!(error = %rejection, "Rejected unreadable question body");
            AppError::internal("Unable to process your question right now")
        }
    })?;

    let question = request.question.unwrap_or_default();
    if question.is_empty() {
        return Err(AppError::bad_request("Question is required"));
    }

    if state.verifier.is_enabled() {
        let token = request.recaptcha_token.unwrap_or_default();
        match state.verifier.verify(&token).await {
            Ok(true) => {}
            Ok(false) => {
                return Err(AppError::bad_request("reCAPTCHA verification failed"));
            }
            Err(e) => {
                tracing::warn!(error = %e, "reCAPTCHA verification errored");
                return Err(AppError::bad_request("reCAPTCHA verification failed"));
            }
        }
    }

    match state.knowledge.match_rule(&question) {
        Some(rule) => tracing::info!(topic = %rule.topic, "Matched question to topic"),
        None => tracing::info!("No topic matched, answering with menu"),
    }

    Ok(Json(AskResponse {
        answer: state.knowledge.answer(&question),
    }))
}
