//! Configuration types for the codeverify client.

use codeverify_core::RouteGroup;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Ceiling applied to every outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable backend configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend host, shared by all route groups.
    pub base_url: Url,
    /// Bearer credential. `None` means calls go out unauthenticated.
    pub api_key: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
    /// Path prefix per route group.
    pub routes: RoutePrefixes,
}

impl BackendConfig {
    /// Create a configuration with the given base URL and defaults elsewhere.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            routes: RoutePrefixes::default(),
        }
    }

    /// Set the credential. An empty key leaves calls unauthenticated.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = (!key.is_empty()).then_some(key);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_routes(mut self, routes: RoutePrefixes) -> Self {
        self.routes = routes;
        self
    }
}

/// Path prefixes of the route groups under the backend host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutePrefixes {
    pub core: String,
    pub github: String,
    pub planning: String,
    pub search: String,
}

impl RoutePrefixes {
    pub fn prefix(&self, group: RouteGroup) -> &str {
        match group {
            RouteGroup::Core => &self.core,
            RouteGroup::Github => &self.github,
            RouteGroup::Planning => &self.planning,
            RouteGroup::Search => &self.search,
        }
    }
}

impl Default for RoutePrefixes {
    fn default() -> Self {
        Self {
            core: "/api".to_string(),
            github: "/api/github".to_string(),
            planning: "/api/planning".to_string(),
            search: "/api/search".to_string(),
        }
    }
}
