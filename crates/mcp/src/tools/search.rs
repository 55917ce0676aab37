// Web search tool.
//
// Failures here come back as a normal payload with `success: false` and a
// suggestion, not as an error envelope. Existing callers rely on that shape.

use crate::envelope;
use crate::protocol::CallToolResult;
use codeverify_client::{Backend, BackendError};
use codeverify_core::{BackendRequest, Route, ValidatedArguments};
use serde_json::{json, Value};
use tracing::warn;

const DEFAULT_COUNT: usize = 5;

pub const SEARCH_SUGGESTION: &str =
    "Web search is unavailable right now. Retry later, rephrase the query, or continue without search results.";

pub async fn web_search(
    backend: &dyn Backend,
    route: &Route,
    args: ValidatedArguments,
) -> CallToolResult {
    let query = args.get_str("query").unwrap_or_default().to_string();
    let count = args
        .get_i64("count")
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(DEFAULT_COUNT);

    let outcome = match BackendRequest::from_route(route, args) {
        Ok(request) => backend.send(request).await,
        Err(e) => Err(BackendError::from(e)),
    };

    match outcome {
        Ok(payload) => envelope::success(&reshape(&query, &payload, count)),
        Err(err) => {
            warn!(error = %err, "web search failed");
            envelope::success(&json!({
                "success": false,
                "error": err.message(),
                "suggestion": SEARCH_SUGGESTION,
            }))
        }
    }
}

/// Trim to `count` results and project each to title/link/snippet/date
fn reshape(query: &str, payload: &Value, count: usize) -> Value {
    let items = payload
        .get("results")
        .or_else(|| payload.get("items"))
        .or_else(|| payload.is_array().then_some(payload))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let results: Vec<Value> = items.iter().take(count).map(project).collect();

    json!({
        "success": true,
        "query": query,
        "count": results.len(),
        "results": results,
    })
}

fn project(item: &Value) -> Value {
    json!({
        "title": first_str(item, &["title", "name"]).unwrap_or_default(),
        "link": first_str(item, &["link", "url"]).unwrap_or_default(),
        "snippet": first_str(item, &["snippet", "description"]).unwrap_or_default(),
        "date": first_str(item, &["date", "publishedDate"]),
    })
}

fn first_str<'a>(item: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| item.get(*k).and_then(Value::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeverify_client::BackendResult;
    use codeverify_core::{catalog, validate, ToolHandler};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct Fixed {
        payload: Value,
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Backend for Fixed {
        async fn send(&self, request: BackendRequest) -> BackendResult<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(request.segments, vec!["web"]);
            Ok(self.payload.clone())
        }
    }

    struct Failing;

    #[async_trait::async_trait]
    impl Backend for Failing {
        async fn send(&self, _request: BackendRequest) -> BackendResult<Value> {
            Err(BackendError::Timeout(Duration::from_secs(30)))
        }
    }

    fn search_call(raw: Value) -> (Route, ValidatedArguments) {
        let spec = catalog::all()
            .into_iter()
            .find(|t| t.name == "web_search")
            .unwrap();
        let ToolHandler::WebSearch(route) = spec.handler.clone() else {
            panic!("web_search must use the search handler");
        };
        (route, validate(&spec, Some(&raw)).unwrap())
    }

    fn body(result: &CallToolResult) -> Value {
        serde_json::from_str(result.text().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_results_trimmed_and_projected() {
        let backend = Fixed {
            payload: json!({
                "results": [
                    {"title": "Rust", "link": "https://rust-lang.org", "snippet": "A language", "date": "2024-01-01", "rank": 1},
                    {"title": "Cargo", "url": "https://doc.rust-lang.org/cargo", "description": "Package manager"},
                    {"title": "Third", "link": "https://example.com", "snippet": "..."}
                ]
            }),
            calls: AtomicUsize::new(0),
        };
        let (route, args) = search_call(json!({"query": "rust", "count": 2}));

        let result = web_search(&backend, &route, args).await;
        assert!(!result.is_error());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

        let body = body(&result);
        assert_eq!(body["success"], true);
        assert_eq!(body["query"], "rust");
        assert_eq!(body["count"], 2);
        assert_eq!(
            body["results"][0],
            json!({"title": "Rust", "link": "https://rust-lang.org", "snippet": "A language", "date": "2024-01-01"})
        );
        assert_eq!(
            body["results"][1],
            json!({"title": "Cargo", "link": "https://doc.rust-lang.org/cargo", "snippet": "Package manager", "date": null})
        );
    }

    #[tokio::test]
    async fn test_missing_result_list() {
        let backend = Fixed {
            payload: json!({"status": "ok"}),
            calls: AtomicUsize::new(0),
        };
        let (route, args) = search_call(json!({"query": "nothing"}));

        let body = body(&web_search(&backend, &route, args).await);
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 0);
        assert_eq!(body["results"], json!([]));
    }

    #[tokio::test]
    async fn test_failure_is_not_an_error_envelope() {
        let (route, args) = search_call(json!({"query": "rust"}));

        let result = web_search(&Failing, &route, args).await;
        assert!(!result.is_error());

        let body = body(&result);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Request timed out after 30s");
        assert_eq!(body["suggestion"], SEARCH_SUGGESTION);
    }
}
