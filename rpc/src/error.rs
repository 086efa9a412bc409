//! RPC error types.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid endpoint URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("node returned error {code}: {message}")]
    Remote { code: i64, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("expected type {expected}, but got {found}: {detail}")]
    UnexpectedType {
        expected: &'static str,
        found: String,
        detail: String,
    },
}

impl RpcError {
    /// Whether the failure happened before the node produced any answer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RpcError::Unreachable(_) | RpcError::Timeout(_) | RpcError::RequestFailed(_)
        )
    }
}
