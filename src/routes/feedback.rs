use axum::{Json, extract::rejection::JsonRejection};
use serde_json::Value;

use super::chat::invalid_body;
use crate::{
    error::AppError,
    message::{FeedbackRequest, FeedbackResponse},
};

// Feedback is only logged, never stored.
pub async fn feedback_handler(
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;

    match payload.feedback {
        Some(Value::String(feedback)) if !feedback.is_empty() => {
            tracing::info!(%feedback, "received feedback");
            Ok(Json(FeedbackResponse { success: true }))
        }
        _ => Err(AppError::InvalidInput("Invalid feedback".to_string())),
    }
}
