// Derivation of the single outbound request for a validated call

use crate::tool::{HttpMethod, Route, RouteGroup};
use crate::validate::ValidatedArguments;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route '{template}' requires path parameter '{name}'")]
    MissingPathParam { template: &'static str, name: String },

    #[error("path parameter '{name}' must be an integer or a non-empty string other than '.' and '..'")]
    InvalidPathParam { name: String },
}

/// One outbound backend call.
///
/// `segments` are relative to the route group's prefix and are not yet
/// percent-encoded; the transport encodes each one as a single path segment.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub method: HttpMethod,
    pub group: RouteGroup,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl BackendRequest {
    /// Fill the route's path parameters from `args`; whatever remains goes to
    /// the body for POST/PUT and to the query string for GET/DELETE.
    pub fn from_route(route: &Route, args: ValidatedArguments) -> Result<Self, RouteError> {
        let mut args = args;
        let mut segments = Vec::new();

        for segment in route.template.split('/').filter(|s| !s.is_empty()) {
            match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => {
                    let value = args.remove(name).ok_or_else(|| RouteError::MissingPathParam {
                        template: route.template,
                        name: name.to_string(),
                    })?;
                    segments.push(path_value(name, value)?);
                }
                None => segments.push(segment.to_string()),
            }
        }

        let rest = args.into_map();
        let (query, body) = if route.method.carries_body() {
            (Vec::new(), Some(Value::Object(rest)))
        } else {
            let mut query = Vec::new();
            for (key, value) in rest {
                push_query(&mut query, &key, value);
            }
            (query, None)
        };

        Ok(Self {
            method: route.method,
            group: route.group,
            segments,
            query,
            body,
        })
    }

    /// Unencoded path below the group prefix, for logs
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

fn path_value(name: &str, value: Value) -> Result<String, RouteError> {
    match value {
        // URL path normalization would drop dot segments and retarget the call
        Value::String(s) if !s.is_empty() && s != "." && s != ".." => Ok(s),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        _ => Err(RouteError::InvalidPathParam {
            name: name.to_string(),
        }),
    }
}

fn push_query(query: &mut Vec<(String, String)>, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => query.push((key.to_string(), s)),
        Value::Array(items) => {
            for item in items {
                push_query(query, key, item);
            }
        }
        other => query.push((key.to_string(), other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldSpec};
    use crate::tool::ToolSpec;
    use crate::validate::validate;
    use serde_json::json;

    fn args(spec: &ToolSpec, raw: Value) -> ValidatedArguments {
        validate(spec, Some(&raw)).unwrap()
    }

    #[test]
    fn test_post_body_excludes_path_params() {
        let route = Route::post(RouteGroup::Planning, "/plans/{planId}/tasks");
        let spec = ToolSpec::proxy("add_task", "Add task", route.clone())
            .field(FieldSpec::string("planId", "Plan").min_len(1).required())
            .field(FieldSpec::string("title", "Title").required())
            .field(FieldSpec::one_of("priority", "Priority", &["low", "medium"]).default_str("medium"));

        let request =
            BackendRequest::from_route(&route, args(&spec, json!({"planId": "p 1/x", "title": "Ship it"})))
                .unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.group, RouteGroup::Planning);
        assert_eq!(request.segments, vec!["plans", "p 1/x", "tasks"]);
        assert!(request.query.is_empty());
        assert_eq!(request.body, Some(json!({"title": "Ship it", "priority": "medium"})));
        assert_eq!(request.path(), "/plans/p 1/x/tasks");
    }

    #[test]
    fn test_get_moves_fields_to_query() {
        let route = Route::get(RouteGroup::Github, "/repos/{owner}/{repo}/pulls");
        let spec = ToolSpec::proxy("github_list_pull_requests", "PRs", route.clone())
            .field(FieldSpec::string("owner", "Owner").required())
            .field(FieldSpec::string("repo", "Repo").required())
            .field(FieldSpec::integer("limit", "Limit").default_int(20))
            .field(FieldSpec::array("labels", "Labels", FieldKind::string()))
            .field(FieldSpec::boolean("draft", "Draft"));

        let request = BackendRequest::from_route(
            &route,
            args(
                &spec,
                json!({"owner": "acme", "repo": "widgets", "labels": ["a", "b"], "draft": true}),
            ),
        )
        .unwrap();

        assert_eq!(request.segments, vec!["repos", "acme", "widgets", "pulls"]);
        assert!(request.body.is_none());
        let mut query = request.query.clone();
        query.sort();
        assert_eq!(
            query,
            vec![
                ("draft".to_string(), "true".to_string()),
                ("labels".to_string(), "a".to_string()),
                ("labels".to_string(), "b".to_string()),
                ("limit".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_get_has_no_query() {
        let route = Route::get(RouteGroup::Core, "/followups");
        let spec = ToolSpec::proxy("get_followup_messages", "Followups", route.clone())
            .field(FieldSpec::string("sessionId", "Session"))
            .field(FieldSpec::string("conversationId", "Conversation"));

        let request = BackendRequest::from_route(&route, args(&spec, json!({}))).unwrap();
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_integer_path_param() {
        let route = Route::post(RouteGroup::Github, "/repos/{owner}/{repo}/pulls/{pullNumber}/verify");
        let spec = ToolSpec::proxy("github_verify_pull_request", "Verify PR", route.clone())
            .field(FieldSpec::string("owner", "Owner").required())
            .field(FieldSpec::string("repo", "Repo").required())
            .field(FieldSpec::integer("pullNumber", "PR").at_least(1).required());

        let request = BackendRequest::from_route(
            &route,
            args(&spec, json!({"owner": "acme", "repo": "w", "pullNumber": 42})),
        )
        .unwrap();
        assert_eq!(request.segments[4], "42");
        assert_eq!(request.body, Some(json!({})));
    }

    #[test]
    fn test_missing_path_param() {
        let route = Route::delete(RouteGroup::Core, "/sources/{sourceId}");
        let err = BackendRequest::from_route(&route, ValidatedArguments::default()).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingPathParam {
                template: "/sources/{sourceId}",
                name: "sourceId".to_string()
            }
        );
    }

    #[test]
    fn test_empty_path_param_rejected() {
        let route = Route::delete(RouteGroup::Core, "/sources/{sourceId}");
        let spec = ToolSpec::proxy("delete_source", "Delete", route.clone())
            .field(FieldSpec::string("sourceId", "Source").required());
        let err = BackendRequest::from_route(&route, args(&spec, json!({"sourceId": ""}))).unwrap_err();
        assert!(matches!(err, RouteError::InvalidPathParam { .. }));
    }

    #[test]
    fn test_dot_path_params_rejected() {
        let route = Route::delete(RouteGroup::Core, "/webhooks/{webhookId}");
        let spec = ToolSpec::proxy("delete_webhook", "Delete", route.clone())
            .field(FieldSpec::string("webhookId", "Webhook").min_len(1).required());

        for id in [".", ".."] {
            let err = BackendRequest::from_route(&route, args(&spec, json!({"webhookId": id})))
                .unwrap_err();
            assert_eq!(
                err,
                RouteError::InvalidPathParam {
                    name: "webhookId".to_string()
                }
            );
        }

        let request =
            BackendRequest::from_route(&route, args(&spec, json!({"webhookId": "..hook"}))).unwrap();
        assert_eq!(request.segments, vec!["webhooks", "..hook"]);
    }
}
