// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/chat`. The input is kept untyped so that a wrong type
/// is reported as invalid input instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub input_value: Option<Value>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub success: bool,
}

/// Body of `POST /api/langflow`.
#[derive(Debug, Deserialize)]
pub struct LangflowRequest {
    #[serde(default)]
    pub input: Option<Value>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LangflowResponse {
    pub data: Value,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub feedback: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Payload sent to the Langflow run endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayPayload {
    pub input_value: String,
    pub output_type: &'static str,
    pub input_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl RelayPayload {
    pub fn chat(input_value: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            input_value: input_value.into(),
            output_type: "chat",
            input_type: "chat",
            session_id,
        }
    }
}
