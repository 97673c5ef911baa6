//! Backend address configuration

use serde::{Deserialize, Serialize};

/// Base URL used when nothing overrides it
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Client configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base address, e.g. `http://localhost:5000`
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Full URL for an endpoint path, joined with exactly one `/`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Replace the base address when `value` is non-blank
    pub fn with_override(mut self, value: Option<&str>) -> Self {
        if let Some(base) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.api_base = base.to_string();
        }
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(option_env!("CLINIC_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}
