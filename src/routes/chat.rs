use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, LangflowRequest, LangflowResponse},
    services::{extractor::extract_message, relay::relay},
    state::SharedState,
};

/// `POST /api/chat`: relay the input and answer with the extracted message.
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;

    let data = relay(
        &state,
        payload.input_value.as_ref(),
        payload.session_id.as_deref(),
        "input_value",
    )
    .await?;

    Ok(Json(ChatResponse {
        message: extract_message(&data),
        success: true,
    }))
}

/// `POST /api/langflow`: relay the input and hand back the raw upstream JSON.
pub async fn langflow_handler(
    State(state): State<SharedState>,
    payload: Result<Json<LangflowRequest>, JsonRejection>,
) -> Result<Json<LangflowResponse>, AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;

    let data = relay(
        &state,
        payload.input.as_ref(),
        payload.session_id.as_deref(),
        "input",
    )
    .await?;

    Ok(Json(LangflowResponse { data }))
}

pub(crate) fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::InvalidInput(format!("Invalid request body: {}", rejection.body_text()))
}
