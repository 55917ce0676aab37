// Argument validation against a tool's declared fields

use crate::schema::{FieldKind, StringFormat};
use crate::tool::ToolSpec;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// One offending field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Arguments did not match the tool's schema
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid arguments for tool '{tool}': {}", summarize(.issues))]
pub struct ValidationError {
    pub tool: String,
    pub issues: Vec<FieldIssue>,
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn details(&self) -> Value {
        json!({ "issues": self.issues })
    }

    pub fn has_issue_for(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

/// Arguments that passed validation, defaults applied, unknown keys dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedArguments(Map<String, Value>);

impl ValidatedArguments {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.0.get(name).and_then(Value::as_i64)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.0.get(name).and_then(Value::as_bool)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// Validate raw arguments for `spec`. Every issue is collected; nothing is
/// returned unless all fields conform.
pub fn validate(
    spec: &ToolSpec,
    arguments: Option<&Value>,
) -> Result<ValidatedArguments, ValidationError> {
    let empty = Map::new();
    let raw = match arguments {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(ValidationError {
                tool: spec.name.to_string(),
                issues: vec![FieldIssue::new("(arguments)", "must be an object")],
            });
        }
    };

    let mut issues = Vec::new();
    let mut validated = Map::new();

    for field in &spec.fields {
        match raw.get(field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    issues.push(FieldIssue::new(field.name, "is required"));
                } else if let Some(default) = &field.default {
                    validated.insert(field.name.to_string(), default.to_value());
                }
            }
            Some(value) => {
                if let Some(value) = check(field.name, &field.kind, value, &mut issues) {
                    validated.insert(field.name.to_string(), value);
                }
            }
        }
    }

    if issues.is_empty() {
        Ok(ValidatedArguments(validated))
    } else {
        Err(ValidationError {
            tool: spec.name.to_string(),
            issues,
        })
    }
}

fn check(path: &str, kind: &FieldKind, value: &Value, issues: &mut Vec<FieldIssue>) -> Option<Value> {
    match kind {
        FieldKind::String { min_len, format } => {
            let Some(s) = value.as_str() else {
                issues.push(FieldIssue::new(path, "must be a string"));
                return None;
            };
            let mut ok = true;
            if let Some(min_len) = min_len {
                if s.chars().count() < *min_len {
                    issues.push(FieldIssue::new(
                        path,
                        format!("must be at least {} characters", min_len),
                    ));
                    ok = false;
                }
            }
            if let Some(StringFormat::Url) = format {
                if url::Url::parse(s).is_err() {
                    issues.push(FieldIssue::new(path, "must be a valid URL"));
                    ok = false;
                }
            }
            ok.then(|| value.clone())
        }
        FieldKind::Integer { min, max } => {
            let n = match value {
                Value::Number(n) => n.as_i64().or_else(|| {
                    n.as_f64()
                        .filter(|f| {
                            f.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(f)
                        })
                        .map(|f| f as i64)
                }),
                _ => None,
            };
            let Some(n) = n else {
                issues.push(FieldIssue::new(path, "must be an integer"));
                return None;
            };
            if let Some(min) = min {
                if n < *min {
                    issues.push(FieldIssue::new(path, format!("must be >= {}", min)));
                    return None;
                }
            }
            if let Some(max) = max {
                if n > *max {
                    issues.push(FieldIssue::new(path, format!("must be <= {}", max)));
                    return None;
                }
            }
            Some(Value::from(n))
        }
        FieldKind::Boolean => {
            if value.is_boolean() {
                Some(value.clone())
            } else {
                issues.push(FieldIssue::new(path, "must be a boolean"));
                None
            }
        }
        FieldKind::Enum(allowed) => match value.as_str() {
            Some(s) if allowed.contains(&s) => Some(value.clone()),
            _ => {
                issues.push(FieldIssue::new(
                    path,
                    format!("must be one of: {}", allowed.join(", ")),
                ));
                None
            }
        },
        FieldKind::Array { items, min_items } => {
            let Some(elements) = value.as_array() else {
                issues.push(FieldIssue::new(path, "must be an array"));
                return None;
            };
            let before = issues.len();
            if let Some(min_items) = min_items {
                if elements.len() < *min_items {
                    issues.push(FieldIssue::new(
                        path,
                        format!("must contain at least {} item(s)", min_items),
                    ));
                }
            }
            let checked: Vec<Value> = elements
                .iter()
                .enumerate()
                .filter_map(|(i, element)| check(&format!("{}[{}]", path, i), items, element, issues))
                .collect();
            (issues.len() == before).then_some(Value::Array(checked))
        }
        FieldKind::Object => {
            if value.is_object() {
                Some(value.clone())
            } else {
                issues.push(FieldIssue::new(path, "must be an object"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;
    use crate::tool::{Route, RouteGroup};

    fn webhook_spec() -> ToolSpec {
        ToolSpec::proxy(
            "register_webhook",
            "Register a webhook",
            Route::post(RouteGroup::Core, "/webhooks"),
        )
        .field(FieldSpec::string("webhookUrl", "URL").url().required())
        .field(FieldSpec::string("webhookSecret", "Secret").min_len(16).required())
        .field(FieldSpec::array(
            "events",
            "Events",
            FieldKind::Enum(&["verification.completed", "quota.warning"]),
        ))
    }

    fn listing_spec() -> ToolSpec {
        ToolSpec::proxy(
            "list_sources",
            "List sources",
            Route::get(RouteGroup::Core, "/sources"),
        )
        .field(FieldSpec::integer("limit", "Limit").range(1, 100).default_int(20))
        .field(FieldSpec::boolean("strictMode", "Strict").default_bool(false))
        .field(FieldSpec::one_of("period", "Period", &["day", "month"]).default_str("month"))
        .field(FieldSpec::string("tag", "Tag"))
    }

    #[test]
    fn test_defaults_applied() {
        let args = validate(&listing_spec(), None).unwrap();
        assert_eq!(args.get_i64("limit"), Some(20));
        assert_eq!(args.get_bool("strictMode"), Some(false));
        assert_eq!(args.get_str("period"), Some("month"));
        assert!(args.get("tag").is_none());
    }

    #[test]
    fn test_null_optional_treated_as_absent() {
        let args = validate(&listing_spec(), Some(&json!({"limit": null, "tag": null}))).unwrap();
        assert_eq!(args.get_i64("limit"), Some(20));
        assert!(args.get("tag").is_none());
    }

    #[test]
    fn test_unknown_keys_dropped() {
        let args = validate(&listing_spec(), Some(&json!({"tag": "rust", "bogus": 1}))).unwrap();
        assert_eq!(args.get_str("tag"), Some("rust"));
        assert!(args.get("bogus").is_none());
    }

    #[test]
    fn test_missing_required() {
        let err = validate(&webhook_spec(), Some(&json!({}))).unwrap_err();
        assert!(err.has_issue_for("webhookUrl"));
        assert!(err.has_issue_for("webhookSecret"));
        assert_eq!(err.issues.len(), 2);
    }

    #[test]
    fn test_short_secret_rejected_even_when_url_valid() {
        let err = validate(
            &webhook_spec(),
            Some(&json!({"webhookUrl": "https://hooks.example.com/cb", "webhookSecret": "fifteen-chars!!"})),
        )
        .unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].field, "webhookSecret");
        assert_eq!(err.issues[0].message, "must be at least 16 characters");
    }

    #[test]
    fn test_bad_url_and_short_secret_both_reported() {
        let err = validate(
            &webhook_spec(),
            Some(&json!({"webhookUrl": "not-a-url", "webhookSecret": "short"})),
        )
        .unwrap_err();
        assert!(err.has_issue_for("webhookUrl"));
        assert!(err.has_issue_for("webhookSecret"));
        assert_eq!(
            err.to_string(),
            "Invalid arguments for tool 'register_webhook': webhookUrl: must be a valid URL; \
             webhookSecret: must be at least 16 characters"
        );
    }

    #[test]
    fn test_array_items_checked() {
        let err = validate(
            &webhook_spec(),
            Some(&json!({
                "webhookUrl": "https://hooks.example.com",
                "webhookSecret": "0123456789abcdef",
                "events": ["quota.warning", "nope"]
            })),
        )
        .unwrap_err();
        assert!(err.has_issue_for("events[1]"));

        let args = validate(
            &webhook_spec(),
            Some(&json!({
                "webhookUrl": "https://hooks.example.com",
                "webhookSecret": "0123456789abcdef",
                "events": ["quota.warning"]
            })),
        )
        .unwrap();
        assert_eq!(args.get("events"), Some(&json!(["quota.warning"])));
    }

    #[test]
    fn test_integer_bounds_and_coercion() {
        let spec = listing_spec();

        let args = validate(&spec, Some(&json!({"limit": 50.0}))).unwrap();
        assert_eq!(args.get("limit"), Some(&json!(50)));

        let err = validate(&spec, Some(&json!({"limit": 0}))).unwrap_err();
        assert_eq!(err.issues[0].message, "must be >= 1");

        let err = validate(&spec, Some(&json!({"limit": 101}))).unwrap_err();
        assert_eq!(err.issues[0].message, "must be <= 100");

        let err = validate(&spec, Some(&json!({"limit": 2.5}))).unwrap_err();
        assert_eq!(err.issues[0].message, "must be an integer");

        let err = validate(&spec, Some(&json!({"limit": "20"}))).unwrap_err();
        assert_eq!(err.issues[0].message, "must be an integer");
    }

    #[test]
    fn test_integer_outside_i64_is_rejected() {
        let spec = ToolSpec::proxy(
            "github_verify_pull_request",
            "Verify PR",
            Route::post(RouteGroup::Github, "/pulls/{pullNumber}/verify"),
        )
        .field(FieldSpec::integer("pullNumber", "PR").at_least(1).required());

        for raw in [json!(1e30), json!(u64::MAX), json!(9_223_372_036_854_775_808.0_f64), json!(f64::MIN)] {
            let err = validate(&spec, Some(&json!({ "pullNumber": raw }))).unwrap_err();
            assert_eq!(err.issues[0].field, "pullNumber");
            assert_eq!(err.issues[0].message, "must be an integer");
        }

        let args = validate(&spec, Some(&json!({"pullNumber": 9_007_199_254_740_992.0_f64}))).unwrap();
        assert_eq!(args.get_i64("pullNumber"), Some(9_007_199_254_740_992));
    }

    #[test]
    fn test_type_mismatches() {
        let spec = listing_spec();
        let err = validate(
            &spec,
            Some(&json!({"strictMode": "yes", "period": "decade", "tag": 7})),
        )
        .unwrap_err();
        assert!(err.has_issue_for("strictMode"));
        assert!(err.has_issue_for("period"));
        assert!(err.has_issue_for("tag"));
    }

    #[test]
    fn test_non_object_arguments() {
        let err = validate(&listing_spec(), Some(&json!([1, 2]))).unwrap_err();
        assert!(err.has_issue_for("(arguments)"));
    }

    #[test]
    fn test_details_lists_issues() {
        let err = validate(&webhook_spec(), None).unwrap_err();
        let details = err.details();
        assert_eq!(details["issues"].as_array().unwrap().len(), 2);
        assert_eq!(details["issues"][0]["field"], "webhookUrl");
    }
}
