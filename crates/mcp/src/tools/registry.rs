// Tool registry: the catalog published through `tools/list`

use crate::protocol::ToolDefinition;
use codeverify_core::{catalog, ToolSpec};
use std::collections::HashMap;

/// Registered tools in listing order, keyed by name
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registry holding the full built-in catalog
    pub fn with_catalog() -> Self {
        let mut registry = Self::new();
        for spec in catalog::all() {
            registry.register(spec);
        }
        registry
    }

    /// Register a tool. A tool with the same name is replaced in place.
    pub fn register(&mut self, spec: ToolSpec) {
        match self.index.get(spec.name) {
            Some(&position) => {
                tracing::warn!(tool = spec.name, "replacing already registered tool");
                self.tools[position] = spec;
            }
            None => {
                self.index.insert(spec.name, self.tools.len());
                self.tools.push(spec);
            }
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// List all tool definitions, in registration order
    pub fn list_definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|spec| ToolDefinition {
                name: spec.name.to_string(),
                description: spec.description.to_string(),
                input_schema: spec.input_schema(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeverify_core::{Route, RouteGroup};

    #[test]
    fn test_catalog_registered_in_order() {
        let registry = ToolRegistry::with_catalog();
        let definitions = registry.list_definitions();

        assert_eq!(definitions.len(), catalog::all().len());
        assert_eq!(definitions[0].name, "verify_code");
        assert_eq!(definitions.last().unwrap().name, "web_search");
        assert!(registry.contains("register_webhook"));
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_register_replaces_duplicate() {
        let mut registry = ToolRegistry::new();
        registry.register(ToolSpec::proxy("a", "first", Route::get(RouteGroup::Core, "/a")));
        registry.register(ToolSpec::proxy("b", "b", Route::get(RouteGroup::Core, "/b")));
        registry.register(ToolSpec::proxy("a", "second", Route::get(RouteGroup::Core, "/a2")));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("a").unwrap().description, "second");
        assert_eq!(registry.list_definitions()[0].name, "a");
    }

    #[test]
    fn test_definitions_carry_schema() {
        let registry = ToolRegistry::with_catalog();
        let verify = registry
            .list_definitions()
            .into_iter()
            .find(|d| d.name == "verify_code")
            .unwrap();

        assert_eq!(verify.input_schema["type"], "object");
        assert_eq!(verify.input_schema["properties"]["strictMode"]["default"], false);
        let required = verify.input_schema["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("code")));
        assert!(required.contains(&serde_json::json!("language")));
    }
}
