// Process configuration: CLI flags and environment, plus an optional TOML file

use anyhow::{Context, Result};
use codeverify_client::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use codeverify_client::{BackendConfig, RoutePrefixes};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Settings read from the TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub routes: RoutePrefixes,
}

impl FileConfig {
    /// Load the file if it exists, otherwise use defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "configuration file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Values that come from flags or the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    pub api_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl BackendSettings {
    pub fn into_backend_config(self, file: FileConfig) -> Result<BackendConfig> {
        let base_url = Url::parse(&self.api_url)
            .with_context(|| format!("Invalid backend URL: {}", self.api_url))?;
        if self.timeout_secs == 0 {
            anyhow::bail!("Timeout must be at least one second");
        }

        Ok(BackendConfig::new(base_url)
            .with_api_key(self.api_key)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_routes(file.routes))
    }
}
