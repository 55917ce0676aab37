// Core group: verification, sources, notebooks, quota, followups, webhooks

use super::{id, limit, strict_mode};
use crate::schema::{FieldKind, FieldSpec};
use crate::tool::{Route, RouteGroup::Core, ToolSpec};

const ENTRY_KINDS: &[&str] = &["note", "code", "result"];
const USAGE_PERIODS: &[&str] = &["day", "week", "month", "year"];
const WEBHOOK_EVENTS: &[&str] = &[
    "verification.completed",
    "verification.failed",
    "quota.warning",
];

pub(super) fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::proxy(
            "verify_code",
            "Verify a code snippet for correctness, security issues and style problems. \
             Returns the verification result with findings and a verdict.",
            Route::post(Core, "/verify"),
        )
        .field(FieldSpec::string("code", "Source code to verify").min_len(1).required())
        .field(
            FieldSpec::string("language", "Programming language of the code, e.g. python")
                .min_len(1)
                .required(),
        )
        .field(strict_mode())
        .field(FieldSpec::string(
            "context",
            "Optional description of what the code is meant to do",
        )),
        ToolSpec::proxy(
            "batch_verify",
            "Verify several code snippets in one call. Each item needs `code` and `language`.",
            Route::post(Core, "/verify/batch"),
        )
        .field(
            FieldSpec::array("items", "Snippets to verify", FieldKind::Object)
                .min_len(1)
                .required(),
        )
        .field(strict_mode()),
        ToolSpec::proxy(
            "get_verification",
            "Fetch a previous verification result by ID.",
            Route::get(Core, "/verifications/{verificationId}"),
        )
        .field(id("verificationId", "Verification ID")),
        ToolSpec::proxy(
            "list_verifications",
            "List recent verification results, newest first.",
            Route::get(Core, "/verifications"),
        )
        .field(limit())
        .field(FieldSpec::string("language", "Only show results for this language")),
        ToolSpec::proxy(
            "add_source",
            "Save a reference source (documentation, spec, snippet) for later verification context.",
            Route::post(Core, "/sources"),
        )
        .field(FieldSpec::string("title", "Source title").min_len(1).required())
        .field(FieldSpec::string("content", "Source content").min_len(1).required())
        .field(FieldSpec::string("url", "Where the source came from").url())
        .field(FieldSpec::array("tags", "Tags for filtering", FieldKind::string())),
        ToolSpec::proxy("list_sources", "List saved sources.", Route::get(Core, "/sources"))
            .field(limit())
            .field(FieldSpec::string("tag", "Only sources carrying this tag")),
        ToolSpec::proxy(
            "get_source",
            "Fetch a saved source by ID.",
            Route::get(Core, "/sources/{sourceId}"),
        )
        .field(id("sourceId", "Source ID")),
        ToolSpec::proxy(
            "delete_source",
            "Delete a saved source.",
            Route::delete(Core, "/sources/{sourceId}"),
        )
        .field(id("sourceId", "Source ID")),
        ToolSpec::proxy(
            "create_notebook",
            "Create a notebook for collecting notes, code and results.",
            Route::post(Core, "/notebooks"),
        )
        .field(FieldSpec::string("name", "Notebook name").min_len(1).required())
        .field(FieldSpec::string("description", "What the notebook is for")),
        ToolSpec::proxy("list_notebooks", "List notebooks.", Route::get(Core, "/notebooks"))
            .field(limit()),
        ToolSpec::proxy(
            "get_notebook",
            "Fetch a notebook and its entries.",
            Route::get(Core, "/notebooks/{notebookId}"),
        )
        .field(id("notebookId", "Notebook ID")),
        ToolSpec::proxy(
            "add_notebook_entry",
            "Append an entry to a notebook.",
            Route::post(Core, "/notebooks/{notebookId}/entries"),
        )
        .field(id("notebookId", "Notebook ID"))
        .field(FieldSpec::string("content", "Entry content").min_len(1).required())
        .field(FieldSpec::one_of("kind", "Entry kind", ENTRY_KINDS).default_str("note")),
        ToolSpec::proxy(
            "get_quota",
            "Show the remaining verification quota for the current API key.",
            Route::get(Core, "/quota"),
        ),
        ToolSpec::proxy(
            "get_usage_stats",
            "Show usage statistics over a period.",
            Route::get(Core, "/usage"),
        )
        .field(FieldSpec::one_of("period", "Aggregation period", USAGE_PERIODS).default_str("month")),
        ToolSpec::proxy(
            "get_followup_messages",
            "Fetch pending follow-up messages. Without identifiers the backend resolves the current session.",
            Route::get(Core, "/followups"),
        )
        .field(FieldSpec::string("sessionId", "Session to read follow-ups for"))
        .field(FieldSpec::string("conversationId", "Conversation to read follow-ups for")),
        ToolSpec::proxy(
            "acknowledge_followup",
            "Mark a follow-up message as handled.",
            Route::post(Core, "/followups/{messageId}/ack"),
        )
        .field(id("messageId", "Follow-up message ID")),
        ToolSpec::proxy(
            "register_webhook",
            "Register a webhook that receives verification events. The secret signs each delivery.",
            Route::post(Core, "/webhooks"),
        )
        .field(FieldSpec::string("webhookUrl", "HTTPS endpoint receiving events").url().required())
        .field(
            FieldSpec::string("webhookSecret", "Signing secret, at least 16 characters")
                .min_len(16)
                .required(),
        )
        .field(FieldSpec::array(
            "events",
            "Events to subscribe to (default: all)",
            FieldKind::Enum(WEBHOOK_EVENTS),
        )),
        ToolSpec::proxy("list_webhooks", "List registered webhooks.", Route::get(Core, "/webhooks")),
        ToolSpec::proxy(
            "delete_webhook",
            "Remove a registered webhook.",
            Route::delete(Core, "/webhooks/{webhookId}"),
        )
        .field(id("webhookId", "Webhook ID")),
    ]
}
