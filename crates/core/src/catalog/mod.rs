// Static tool catalog, grouped by backend route group

mod github;
mod local;
mod planning;
mod verification;

use crate::schema::FieldSpec;
use crate::tool::ToolSpec;

/// Every tool, in listing order
pub fn all() -> Vec<ToolSpec> {
    let mut tools = verification::tools();
    tools.extend(github::tools());
    tools.extend(planning::tools());
    tools.extend(local::tools());
    tools
}

fn id(name: &'static str, description: &'static str) -> FieldSpec {
    FieldSpec::string(name, description).min_len(1).required()
}

fn limit() -> FieldSpec {
    FieldSpec::integer("limit", "Maximum number of results to return")
        .range(1, 100)
        .default_int(20)
}

fn strict_mode() -> FieldSpec {
    FieldSpec::boolean(
        "strictMode",
        "Fail verification on warnings as well as errors",
    )
    .default_bool(false)
}
