// Dispatcher: registry lookup, validation, then one handler per call

use crate::envelope;
use crate::protocol::{CallToolResult, ToolDefinition};
use crate::tools::{search, time, ToolRegistry};
use codeverify_client::Backend;
use codeverify_core::{validate, BackendRequest, Route, ToolHandler, ValidatedArguments};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Cheap to clone; each clone shares the registry and backend.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    backend: Arc<dyn Backend>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>, backend: Arc<dyn Backend>) -> Self {
        Self { registry, backend }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.registry.list_definitions()
    }

    /// Handle one `tools/call`. Never fails: every outcome is an envelope.
    pub async fn call_tool(&self, name: &str, arguments: Option<Value>) -> CallToolResult {
        let Some(spec) = self.registry.get(name) else {
            warn!(tool = name, "unknown tool");
            return envelope::unknown_tool(name);
        };

        let args = match validate(spec, arguments.as_ref()) {
            Ok(args) => args,
            Err(e) => {
                warn!(tool = name, error = %e, "argument validation failed");
                return envelope::from_validation_error(&e);
            }
        };

        debug!(tool = name, "dispatching");
        match &spec.handler {
            ToolHandler::Proxy(route) => self.forward(name, route, args).await,
            ToolHandler::WebSearch(route) => {
                search::web_search(self.backend.as_ref(), route, args).await
            }
            ToolHandler::LocalTime => time::current_time(&args),
        }
    }

    async fn forward(&self, tool: &str, route: &Route, args: ValidatedArguments) -> CallToolResult {
        let request = match BackendRequest::from_route(route, args) {
            Ok(request) => request,
            Err(e) => {
                warn!(tool, error = %e, "could not build backend request");
                return envelope::failure(e.to_string(), Value::Null);
            }
        };

        match self.backend.send(request).await {
            Ok(payload) => envelope::success(&payload),
            Err(e) => {
                warn!(tool, error = %e, "backend call failed");
                envelope::from_backend_error(&e)
            }
        }
    }
}
