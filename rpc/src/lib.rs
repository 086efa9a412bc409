//! JSON-RPC clients for a node's HTTP API.
//!
//! Provides:
//! - [`PlatformApi`]: platform chain queries (height, current and pending validators)
//! - [`InfoApi`]: node identity and version queries
//! - [`ClientFactory`]: construction of both for a given base URL
//!
//! The traits are the seam the stats builders depend on; the reqwest-backed
//! implementations live next to them.

pub mod decode;
pub mod error;
pub mod factory;
pub mod info;
pub mod jsonrpc;
pub mod platform;

pub use error::RpcError;
pub use factory::{ClientFactory, HttpClientFactory};
pub use info::{InfoApi, InfoClient, NodeIdReply, NodeVersion};
pub use platform::{PendingSet, PlatformApi, PlatformClient};
