//! The seam between the dispatcher and the network.

use crate::error::BackendResult;
use codeverify_core::BackendRequest;
use serde_json::Value;

/// Something that can carry out one backend request.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Issue the request and return the decoded response payload.
    async fn send(&self, request: BackendRequest) -> BackendResult<Value>;
}
