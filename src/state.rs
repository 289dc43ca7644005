// src/state.rs
use std::sync::Arc;

use crate::config::RelayConfig;
use crate::services::langflow::LangflowClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: RelayConfig,
    pub langflow: LangflowClient,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            langflow: LangflowClient::new(),
        }
    }
}
