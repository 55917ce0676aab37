//! HTTP transport layer for the codeverify client.

use crate::backend::Backend;
use crate::config::BackendConfig;
use crate::error::{BackendError, BackendResult};
use codeverify_core::{BackendRequest, HttpMethod};
use reqwest::{header, Client, Method};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// HTTP transport that issues one request per backend call.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<BackendConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<BackendConfig>) -> BackendResult<Self> {
        let mut headers = header::HeaderMap::new();

        if let Some(ref api_key) = config.api_key {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", api_key))
                    .map_err(|_| BackendError::Config("Invalid API key format".to_string()))?,
            );
        }

        let client = Client::builder()
            .user_agent(concat!("codeverify-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Resolve the full URL: host, group prefix, encoded segments, query.
    pub fn build_url(&self, request: &BackendRequest) -> BackendResult<Url> {
        let mut url = self.config.base_url.clone();
        let prefix = self.config.routes.prefix(request.group);

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| BackendError::Config(format!("{} cannot be a base URL", self.config.base_url)))?;
            segments.pop_if_empty();
            segments.extend(prefix.split('/').filter(|s| !s.is_empty()));
            segments.extend(&request.segments);
        }

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }

        Ok(url)
    }

    fn transport_error(&self, error: reqwest::Error) -> BackendError {
        if error.is_timeout() {
            BackendError::Timeout(self.config.timeout)
        } else {
            BackendError::Http(error)
        }
    }

    /// Execute the request.
    ///
    /// A 2xx response yields its decoded JSON body (a non-JSON body comes back
    /// as a string, an empty one as null). Anything else is an error.
    pub async fn execute(&self, request: BackendRequest) -> BackendResult<Value> {
        let url = self.build_url(&request)?;
        debug!(method = %request.method, url = %url, "backend request");

        let mut builder = self.client.request(method(request.method), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "backend returned error status");
            return Err(BackendError::from_response(status.as_u16(), &text));
        }

        Ok(decode_body(&text))
    }
}

#[async_trait::async_trait]
impl Backend for HttpTransport {
    async fn send(&self, request: BackendRequest) -> BackendResult<Value> {
        self.execute(request).await
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
