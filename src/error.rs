// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Server configuration error")]
    Configuration,

    #[error("{0}")]
    InvalidInput(String),

    /// Upstream answered with a non-success status, which is proxied back.
    #[error("Failed to get response from AI service")]
    UpstreamStatus(StatusCode),

    #[error("Invalid response from AI service")]
    UpstreamParse,

    #[error("Internal server error")]
    Upstream(#[from] reqwest::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamStatus(status) => *status,
            AppError::Configuration
            | AppError::UpstreamParse
            | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::InvalidInput(msg) => tracing::warn!(%msg, "rejected request"),
            AppError::UpstreamStatus(code) => {
                tracing::error!(status = %code, "langflow returned an error status")
            }
            AppError::Upstream(err) => tracing::error!(error = %err, "langflow request failed"),
            AppError::Configuration => {
                tracing::error!("LANGFLOW_URL or LANGFLOW_API_KEY not set")
            }
            AppError::UpstreamParse => {
                tracing::error!("failed to parse langflow response as JSON")
            }
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
