//! # codeverify client
//!
//! Forwards validated tool calls to the codeverify backend. Every call maps to
//! exactly one HTTP request; there is no retry, caching or batching here.
//!
//! ```rust,no_run
//! use codeverify_client::{Backend, BackendConfig, HttpTransport};
//! use codeverify_core::{catalog, validate, BackendRequest};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BackendConfig::new("http://localhost:3000".parse()?).with_api_key("sk-key");
//! let transport = HttpTransport::new(Arc::new(config))?;
//!
//! let tools = catalog::all();
//! let quota = tools.iter().find(|t| t.name == "get_quota").unwrap();
//! let args = validate(quota, None)?;
//! let request = BackendRequest::from_route(quota.route().unwrap(), args)?;
//!
//! let payload = transport.send(request).await?;
//! println!("{payload:#}");
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod transport;

pub use backend::Backend;
pub use config::{BackendConfig, RoutePrefixes};
pub use error::{BackendError, BackendResult};
pub use transport::HttpTransport;
