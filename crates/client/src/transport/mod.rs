//! Transport layer for the codeverify client.

pub mod http;

pub use http::HttpTransport;
