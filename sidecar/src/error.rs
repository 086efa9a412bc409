//! Sidecar error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SidecarError {
    #[error("subnet name {name:?} is invalid: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("no sidecar found for subnet {name:?} at {path}")]
    NotFound { name: String, path: String },

    #[error("failed to read sidecar {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse sidecar {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error(
        "no subnetID found for subnet {name:?} on {network}; has this subnet actually been deployed to this network?"
    )]
    NotDeployed { name: String, network: String },
}
