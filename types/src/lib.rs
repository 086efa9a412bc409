//! Fundamental types for substat.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! node and subnet identifiers, the networks we can query, timestamps, and the
//! validator records returned by the platform chain.

pub mod error;
pub mod ids;
pub mod network;
pub mod serde_str;
pub mod time;
pub mod validator;

pub use error::TypesError;
pub use ids::{NodeId, SubnetId};
pub use network::Network;
pub use time::{TimeFormat, Timestamp};
pub use validator::{CurrentValidator, Delegator, PendingValidator};
