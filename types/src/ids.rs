//! Node and subnet identifiers.
//!
//! Both are carried as their canonical textual form. We only check the shape
//! (prefix and base58 alphabet); the remote node remains the authority on
//! checksums.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn is_base58(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| BASE58_ALPHABET.contains(c))
}

/// Identifier of a node taking part in the network,
/// e.g. `NodeID-7Xhw2mDxuDS44j42TCB6U5579esbSt3Lg`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// The prefix every textual node ID carries.
    pub const PREFIX: &'static str = "NodeID-";

    pub fn new(raw: impl Into<String>) -> Result<Self, TypesError> {
        let s = raw.into();
        match s.strip_prefix(Self::PREFIX) {
            Some(body) if is_base58(body) => Ok(Self(s)),
            _ => Err(TypesError::InvalidNodeId(s)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NodeId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for NodeId {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// Identifier of a subnet on the platform chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubnetId(String);

impl SubnetId {
    /// Textual form of the all-zero ID, used by sidecars for "never deployed".
    pub const EMPTY_STR: &'static str = "11111111111111111111111111111111LpoYY";

    pub fn new(raw: impl Into<String>) -> Result<Self, TypesError> {
        let s = raw.into();
        if is_base58(&s) {
            Ok(Self(s))
        } else {
            Err(TypesError::InvalidSubnetId(s))
        }
    }

    /// The all-zero subnet ID.
    pub fn empty() -> Self {
        Self(Self::EMPTY_STR.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == Self::EMPTY_STR
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubnetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SubnetId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SubnetId {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<SubnetId> for String {
    fn from(id: SubnetId) -> Self {
        id.0
    }
}
