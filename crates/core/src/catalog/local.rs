// Tools that do not proxy straight through

use crate::schema::FieldSpec;
use crate::tool::{Route, RouteGroup, ToolHandler, ToolSpec};

pub(super) fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new(
            "get_current_time",
            "Current local and UTC time. `full` adds timezone offset, ISO week, quarter, \
             days left in the month and year, and the epoch timestamp.",
            ToolHandler::LocalTime,
        )
        .field(FieldSpec::one_of("format", "Output shape", &["short", "full"]).default_str("full")),
        ToolSpec::new(
            "web_search",
            "Search the web. Returns title, link, snippet and date for each result.",
            ToolHandler::WebSearch(Route::post(RouteGroup::Search, "/web")),
        )
        .field(FieldSpec::string("query", "Search query").min_len(1).required())
        .field(
            FieldSpec::integer("count", "Number of results to return")
                .range(1, 20)
                .default_int(5),
        ),
    ]
}
