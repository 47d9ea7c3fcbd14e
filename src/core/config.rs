//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Public Transfluent API endpoint
pub const TRANSFLUENT_URL: &str = "https://transfluent.com/v2/";

/// Configuration for the Transfluent client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL all request paths are appended to
    pub base_url: String,
    /// Pre-existing token for an already-authenticated session
    pub token: Option<String>,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TRANSFLUENT_URL.to_string(),
            token: None,
            timeout_ms: 30000,
        }
    }
}

impl ClientConfig {
    /// Configuration with a pre-existing session token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Override the base URL, e.g. for a staging deployment
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            return Err(anyhow::anyhow!("base_url is required"));
        }

        // Paths are appended verbatim, so the base must end with a separator
        if !self.base_url.ends_with('/') {
            return Err(anyhow::anyhow!("base_url must end with '/'"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }
}
