// src/routes/mod.rs
pub mod chat;
pub mod feedback;

use crate::state::SharedState;
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use chat::{chat_handler, langflow_handler};
use feedback::feedback_handler;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/langflow", post(langflow_handler))
        .route("/feedback", post(feedback_handler))
        .layer(CorsLayer::very_permissive());

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}

async fn health_handler(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "upstream_configured": state.config.is_configured(),
    }))
}
