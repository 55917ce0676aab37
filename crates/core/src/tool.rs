// Tool descriptors: name, argument schema and how the call is handled

use crate::schema::{json_schema_object, FieldSpec};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Logical path prefix on the backend host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteGroup {
    /// Verification, sources, notebooks, quota, followups, webhooks
    Core,
    /// GitHub integration
    Github,
    /// Plans, tasks, requirements, design notes
    Planning,
    /// Web search proxy
    Search,
}

impl fmt::Display for RouteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Core => "core",
            Self::Github => "github",
            Self::Planning => "planning",
            Self::Search => "search",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether leftover arguments travel as a JSON body (otherwise as query parameters)
    pub fn carries_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend route for a tool. `{name}` segments in the template are filled
/// from the argument of the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub group: RouteGroup,
    pub method: HttpMethod,
    pub template: &'static str,
}

impl Route {
    pub fn new(group: RouteGroup, method: HttpMethod, template: &'static str) -> Self {
        Self {
            group,
            method,
            template,
        }
    }

    pub fn get(group: RouteGroup, template: &'static str) -> Self {
        Self::new(group, HttpMethod::Get, template)
    }

    pub fn post(group: RouteGroup, template: &'static str) -> Self {
        Self::new(group, HttpMethod::Post, template)
    }

    pub fn put(group: RouteGroup, template: &'static str) -> Self {
        Self::new(group, HttpMethod::Put, template)
    }

    pub fn delete(group: RouteGroup, template: &'static str) -> Self {
        Self::new(group, HttpMethod::Delete, template)
    }

    /// Names of the path parameters, in template order
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.template
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
    }
}

/// How a validated call is carried out
#[derive(Debug, Clone, PartialEq)]
pub enum ToolHandler {
    /// Forward one request and pass the response through unchanged
    Proxy(Route),
    /// Forward to the search proxy and reshape the result list
    WebSearch(Route),
    /// Computed from the process clock, no network
    LocalTime,
}

impl ToolHandler {
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Proxy(route) | Self::WebSearch(route) => Some(route),
            Self::LocalTime => None,
        }
    }
}

/// A registered tool
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldSpec>,
    pub handler: ToolHandler,
}

impl ToolSpec {
    pub fn new(name: &'static str, description: &'static str, handler: ToolHandler) -> Self {
        Self {
            name,
            description,
            fields: Vec::new(),
            handler,
        }
    }

    pub fn proxy(name: &'static str, description: &'static str, route: Route) -> Self {
        Self::new(name, description, ToolHandler::Proxy(route))
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field_spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn route(&self) -> Option<&Route> {
        self.handler.route()
    }

    /// JSON schema advertised in `tools/list`
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.json_schema()))
            .collect();
        let required = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        json_schema_object(properties, required)
    }
}
