// Tool catalog, argument validation and backend request derivation.
// Nothing in this crate performs I/O.

pub mod catalog;
pub mod clock;
pub mod request;
pub mod schema;
pub mod tool;
pub mod validate;

pub use clock::{TimeFormat, TimeSnapshot};
pub use request::{BackendRequest, RouteError};
pub use schema::{DefaultValue, FieldKind, FieldSpec, StringFormat};
pub use tool::{HttpMethod, Route, RouteGroup, ToolHandler, ToolSpec};
pub use validate::{validate, FieldIssue, ValidatedArguments, ValidationError};
