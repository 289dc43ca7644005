// src/config.rs
use std::net::SocketAddr;

use crate::error::AppError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Settings for the relay, read once at startup.
#[derive(Clone)]
pub struct RelayConfig {
    pub langflow_url: Option<String>,
    pub api_key: Option<String>,
    /// When false the upstream is called without a bearer token.
    pub require_api_key: bool,
    pub bind_addr: Option<String>,
}

/// A validated upstream target.
#[derive(Clone, Copy)]
pub struct Upstream<'a> {
    pub url: &'a str,
    pub api_key: Option<&'a str>,
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("langflow_url", &self.langflow_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("require_api_key", &self.require_api_key)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl RelayConfig {
    pub fn new(langflow_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            langflow_url: Some(langflow_url.into()),
            api_key: Some(api_key.into()),
            require_api_key: true,
            bind_addr: None,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let require_api_key = match get("LANGFLOW_REQUIRE_API_KEY") {
            Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "false" | "0" | "no"),
            None => true,
        };

        Self {
            langflow_url: get("LANGFLOW_URL"),
            api_key: get("LANGFLOW_API_KEY"),
            require_api_key,
            bind_addr: get("BIND_ADDR"),
        }
    }

    /// Resolve the upstream target, failing if required settings are missing.
    pub fn upstream(&self) -> Result<Upstream<'_>, AppError> {
        let url = self.langflow_url.as_deref().ok_or(AppError::Configuration)?;
        let api_key = self.api_key.as_deref();
        if self.require_api_key && api_key.is_none() {
            return Err(AppError::Configuration);
        }
        Ok(Upstream { url, api_key })
    }

    pub fn is_configured(&self) -> bool {
        self.upstream().is_ok()
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|e| anyhow::anyhow!("invalid BIND_ADDR {raw:?}: {e}"))
    }
}
