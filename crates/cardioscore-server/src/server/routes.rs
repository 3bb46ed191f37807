//! Route handlers

use crate::config::OutputMode;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cardioscore_core::{Error, PredictRequest, FEATURE_NAMES};

// ============================================================================
// Health endpoint
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Model metadata endpoint
// ============================================================================

pub async fn model_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "model": state.classifier.name(),
        "feature_names": FEATURE_NAMES,
        "output": state.config.output,
        "threshold": state.config.threshold,
    }))
}

// ============================================================================
// Prediction endpoint
// ============================================================================

pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> impl IntoResponse {
    // Presence validation always runs, regardless of output mode
    let features = match request.to_features() {
        Ok(features) => features,
        Err(err @ Error::MissingField(_)) => {
            tracing::debug!(error = %err, "rejected prediction request");
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": err.to_string() })),
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "request validation failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": err.to_string() })),
            );
        }
    };

    // The configured threshold drives the label in both output modes; the
    // modes differ only in response shape
    match state
        .classifier
        .predict_with_threshold(&features, state.config.threshold)
    {
        Ok((label, probability)) => {
            tracing::debug!(prediction = label, probability, "served prediction");
            let body = match state.config.output {
                OutputMode::Label => serde_json::json!({ "prediction": label }),
                OutputMode::Probability => serde_json::json!({
                    "prediction": label,
                    "probability": probability,
                }),
            };
            (StatusCode::OK, Json(body))
        }
        Err(err) => {
            tracing::error!(error = %err, "inference failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": err.to_string() })),
            )
        }
    }
}
