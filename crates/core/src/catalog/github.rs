// GitHub integration group

use super::{id, limit, strict_mode};
use crate::schema::{FieldKind, FieldSpec};
use crate::tool::{Route, RouteGroup::Github, ToolSpec};

const VISIBILITY: &[&str] = &["all", "public", "private"];
const PR_STATES: &[&str] = &["open", "closed", "all"];

fn owner() -> FieldSpec {
    id("owner", "Repository owner (user or organization)")
}

fn repo() -> FieldSpec {
    id("repo", "Repository name")
}

fn pull_number() -> FieldSpec {
    FieldSpec::integer("pullNumber", "Pull request number")
        .at_least(1)
        .required()
}

pub(super) fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::proxy(
            "github_list_repos",
            "List repositories visible to the connected GitHub account.",
            Route::get(Github, "/repos"),
        )
        .field(FieldSpec::one_of("visibility", "Repository visibility", VISIBILITY).default_str("all"))
        .field(limit()),
        ToolSpec::proxy(
            "github_get_file",
            "Read a file from a GitHub repository.",
            Route::get(Github, "/repos/{owner}/{repo}/contents"),
        )
        .field(owner())
        .field(repo())
        .field(FieldSpec::string("path", "File path inside the repository").min_len(1).required())
        .field(FieldSpec::string("ref", "Branch, tag or commit (default: repository default branch)")),
        ToolSpec::proxy(
            "github_list_pull_requests",
            "List pull requests of a repository.",
            Route::get(Github, "/repos/{owner}/{repo}/pulls"),
        )
        .field(owner())
        .field(repo())
        .field(FieldSpec::one_of("state", "Pull request state", PR_STATES).default_str("open"))
        .field(limit()),
        ToolSpec::proxy(
            "github_create_issue",
            "Open an issue in a repository.",
            Route::post(Github, "/repos/{owner}/{repo}/issues"),
        )
        .field(owner())
        .field(repo())
        .field(FieldSpec::string("title", "Issue title").min_len(1).required())
        .field(FieldSpec::string("body", "Issue body (markdown)"))
        .field(FieldSpec::array("labels", "Labels to apply", FieldKind::string())),
        ToolSpec::proxy(
            "github_comment_pull_request",
            "Comment on a pull request.",
            Route::post(Github, "/repos/{owner}/{repo}/pulls/{pullNumber}/comments"),
        )
        .field(owner())
        .field(repo())
        .field(pull_number())
        .field(FieldSpec::string("body", "Comment body (markdown)").min_len(1).required()),
        ToolSpec::proxy(
            "github_verify_pull_request",
            "Run code verification over the changes of a pull request.",
            Route::post(Github, "/repos/{owner}/{repo}/pulls/{pullNumber}/verify"),
        )
        .field(owner())
        .field(repo())
        .field(pull_number())
        .field(strict_mode()),
    ]
}
