// src/services/relay.rs
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use crate::{error::AppError, message::RelayPayload, state::AppState};

/// Validate, forward one input to Langflow and return the raw response.
///
/// Configuration is checked before the input, and neither failure reaches
/// the network.
pub async fn relay(
    state: &AppState,
    input: Option<&Value>,
    session_id: Option<&str>,
    field: &str,
) -> Result<Value, AppError> {
    let upstream = state.config.upstream()?;

    let input_value = match input {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(AppError::InvalidInput(format!("Invalid {field}"))),
    };

    let session_id = session_id
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let payload = RelayPayload::chat(input_value, session_id);

    let span = tracing::info_span!(
        "relay",
        request_id = %Uuid::new_v4(),
        session_id = payload.session_id.as_deref().unwrap_or("-"),
    );
    state.langflow.run(upstream, &payload).instrument(span).await
}
