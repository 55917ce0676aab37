// Declarative argument schemas for tool descriptors

use serde_json::{json, Map, Value};

/// Extra format checks applied on top of the string type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    Url,
}

/// Accepted shape of a single argument
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String {
        min_len: Option<usize>,
        format: Option<StringFormat>,
    },
    Integer {
        min: Option<i64>,
        max: Option<i64>,
    },
    Boolean,
    Enum(&'static [&'static str]),
    Array {
        items: Box<FieldKind>,
        min_items: Option<usize>,
    },
    Object,
}

impl FieldKind {
    pub fn string() -> Self {
        Self::String {
            min_len: None,
            format: None,
        }
    }

    pub fn integer() -> Self {
        Self::Integer {
            min: None,
            max: None,
        }
    }

    /// Render as a JSON schema fragment
    pub fn json_schema(&self) -> Value {
        match self {
            Self::String { min_len, format } => {
                let mut schema = json!({ "type": "string" });
                if let Some(min_len) = min_len {
                    schema["minLength"] = json!(min_len);
                }
                if let Some(StringFormat::Url) = format {
                    schema["format"] = json!("uri");
                }
                schema
            }
            Self::Integer { min, max } => {
                let mut schema = json!({ "type": "integer" });
                if let Some(min) = min {
                    schema["minimum"] = json!(min);
                }
                if let Some(max) = max {
                    schema["maximum"] = json!(max);
                }
                schema
            }
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Enum(values) => json!({ "type": "string", "enum": values }),
            Self::Array { items, min_items } => {
                let mut schema = json!({ "type": "array", "items": items.json_schema() });
                if let Some(min_items) = min_items {
                    schema["minItems"] = json!(min_items);
                }
                schema
            }
            Self::Object => json!({ "type": "object" }),
        }
    }
}

/// Default applied when an optional argument is absent
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl DefaultValue {
    pub fn to_value(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(n) => Value::from(*n),
            Self::Str(s) => Value::String((*s).to_string()),
        }
    }
}

/// One named argument of a tool
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<DefaultValue>,
}

impl FieldSpec {
    pub fn new(name: &'static str, description: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
            default: None,
        }
    }

    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldKind::string())
    }

    pub fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldKind::integer())
    }

    pub fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldKind::Boolean)
    }

    pub fn one_of(
        name: &'static str,
        description: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self::new(name, description, FieldKind::Enum(values))
    }

    pub fn array(name: &'static str, description: &'static str, items: FieldKind) -> Self {
        Self::new(
            name,
            description,
            FieldKind::Array {
                items: Box::new(items),
                min_items: None,
            },
        )
    }

    pub fn object(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldKind::Object)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Minimum character count for strings, minimum item count for arrays
    pub fn min_len(mut self, n: usize) -> Self {
        match &mut self.kind {
            FieldKind::String { min_len, .. } => *min_len = Some(n),
            FieldKind::Array { min_items, .. } => *min_items = Some(n),
            _ => {}
        }
        self
    }

    pub fn url(mut self) -> Self {
        if let FieldKind::String { format, .. } = &mut self.kind {
            *format = Some(StringFormat::Url);
        }
        self
    }

    pub fn range(mut self, lo: i64, hi: i64) -> Self {
        if let FieldKind::Integer { min, max } = &mut self.kind {
            *min = Some(lo);
            *max = Some(hi);
        }
        self
    }

    pub fn at_least(mut self, lo: i64) -> Self {
        if let FieldKind::Integer { min, .. } = &mut self.kind {
            *min = Some(lo);
        }
        self
    }

    pub fn default_bool(mut self, value: bool) -> Self {
        self.default = Some(DefaultValue::Bool(value));
        self
    }

    pub fn default_int(mut self, value: i64) -> Self {
        self.default = Some(DefaultValue::Int(value));
        self
    }

    pub fn default_str(mut self, value: &'static str) -> Self {
        self.default = Some(DefaultValue::Str(value));
        self
    }

    pub fn json_schema(&self) -> Value {
        let mut schema = self.kind.json_schema();
        schema["description"] = json!(self.description);
        if let Some(default) = &self.default {
            schema["default"] = default.to_value();
        }
        schema
    }
}

pub fn json_schema_object(properties: Map<String, Value>, required: Vec<&str>) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_schema_constraints() {
        let field = FieldSpec::string("webhookUrl", "Callback URL").url().min_len(8);
        let schema = field.json_schema();

        assert_eq!(schema["type"], "string");
        assert_eq!(schema["format"], "uri");
        assert_eq!(schema["minLength"], 8);
        assert_eq!(schema["description"], "Callback URL");
    }

    #[test]
    fn test_default_rendered() {
        let field = FieldSpec::integer("limit", "Max results").range(1, 100).default_int(20);
        let schema = field.json_schema();

        assert_eq!(schema["default"], 20);
        assert_eq!(schema["minimum"], 1);
        assert_eq!(schema["maximum"], 100);
    }

    #[test]
    fn test_enum_and_array() {
        let field = FieldSpec::array(
            "events",
            "Subscribed events",
            FieldKind::Enum(&["a", "b"]),
        )
        .min_len(1);
        let schema = field.json_schema();

        assert_eq!(schema["type"], "array");
        assert_eq!(schema["minItems"], 1);
        assert_eq!(schema["items"]["enum"], json!(["a", "b"]));
    }

    #[test]
    fn test_modifiers_ignore_other_kinds() {
        let field = FieldSpec::boolean("strictMode", "Strict").url().range(0, 1).min_len(3);
        assert_eq!(field.kind, FieldKind::Boolean);
    }
}
