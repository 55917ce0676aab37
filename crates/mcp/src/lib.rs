// MCP (Model Context Protocol) server for codeverify.
// Exposes the tool catalog to agent clients and forwards each call to the backend.

pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod protocol;
pub mod server;
pub mod tools;

pub use dispatch::Dispatcher;
pub use server::McpServer;
