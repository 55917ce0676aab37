pub mod registry;
pub mod search;
pub mod time;

pub use registry::ToolRegistry;
