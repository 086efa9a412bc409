//! Errors raised while parsing or validating shared types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid node ID {0:?}: expected `NodeID-` followed by a base58 string")]
    InvalidNodeId(String),

    #[error("invalid subnet ID {0:?}: expected a non-empty base58 string")]
    InvalidSubnetId(String),

    #[error("unsupported network {0:?}")]
    UnknownNetwork(String),

    #[error("invalid time format {0:?}: expected `local` or `utc`")]
    InvalidTimeFormat(String),
}
