// Planning group: plans, tasks, requirements, design notes

use super::{id, limit};
use crate::schema::FieldSpec;
use crate::tool::{Route, RouteGroup::Planning, ToolSpec};

const PLAN_STATUSES: &[&str] = &["draft", "active", "completed", "archived"];
const TASK_STATUSES: &[&str] = &["todo", "in_progress", "done", "blocked"];
const TASK_PRIORITIES: &[&str] = &["low", "medium", "high"];
const REQUIREMENT_PRIORITIES: &[&str] = &["must", "should", "could"];

fn plan_id() -> FieldSpec {
    id("planId", "Plan ID")
}

fn task_id() -> FieldSpec {
    id("taskId", "Task ID")
}

pub(super) fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::proxy("create_plan", "Create a plan.", Route::post(Planning, "/plans"))
            .field(FieldSpec::string("title", "Plan title").min_len(1).required())
            .field(FieldSpec::string("goal", "What the plan should achieve"))
            .field(FieldSpec::string("description", "Longer description")),
        ToolSpec::proxy("list_plans", "List plans.", Route::get(Planning, "/plans"))
            .field(FieldSpec::one_of("status", "Only plans in this status", PLAN_STATUSES))
            .field(limit()),
        ToolSpec::proxy(
            "get_plan",
            "Fetch a plan with its tasks, requirements and design notes.",
            Route::get(Planning, "/plans/{planId}"),
        )
        .field(plan_id()),
        ToolSpec::proxy(
            "update_plan",
            "Update a plan's title, description or status.",
            Route::put(Planning, "/plans/{planId}"),
        )
        .field(plan_id())
        .field(FieldSpec::string("title", "New title").min_len(1))
        .field(FieldSpec::string("description", "New description"))
        .field(FieldSpec::one_of("status", "New status", PLAN_STATUSES)),
        ToolSpec::proxy(
            "add_task",
            "Add a task to a plan.",
            Route::post(Planning, "/plans/{planId}/tasks"),
        )
        .field(plan_id())
        .field(FieldSpec::string("title", "Task title").min_len(1).required())
        .field(FieldSpec::string("description", "Task details"))
        .field(FieldSpec::one_of("priority", "Task priority", TASK_PRIORITIES).default_str("medium")),
        ToolSpec::proxy(
            "update_task",
            "Update a task's title, status or notes.",
            Route::put(Planning, "/tasks/{taskId}"),
        )
        .field(task_id())
        .field(FieldSpec::string("title", "New title").min_len(1))
        .field(FieldSpec::one_of("status", "New status", TASK_STATUSES))
        .field(FieldSpec::string("notes", "Progress notes")),
        ToolSpec::proxy("delete_task", "Delete a task.", Route::delete(Planning, "/tasks/{taskId}"))
            .field(task_id()),
        ToolSpec::proxy(
            "add_requirement",
            "Attach a requirement to a plan.",
            Route::post(Planning, "/plans/{planId}/requirements"),
        )
        .field(plan_id())
        .field(FieldSpec::string("text", "Requirement statement").min_len(1).required())
        .field(
            FieldSpec::one_of("priority", "MoSCoW priority", REQUIREMENT_PRIORITIES)
                .default_str("should"),
        ),
        ToolSpec::proxy(
            "add_design_note",
            "Attach a design note to a plan.",
            Route::post(Planning, "/plans/{planId}/design-notes"),
        )
        .field(plan_id())
        .field(FieldSpec::string("title", "Note title").min_len(1).required())
        .field(FieldSpec::string("content", "Note body (markdown)").min_len(1).required()),
    ]
}
