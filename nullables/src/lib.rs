//! Nullable infrastructure for deterministic testing.
//!
//! The stats builders and the endpoint resolver only see the node through
//! the `PlatformApi`, `InfoApi` and `ClientFactory` traits. This crate
//! provides implementations of those traits that:
//! - Return pre-configured replies
//! - Can be told to fail, or to stall past a timeout
//! - Record which methods were called
//! - Never touch the network
//!
//! Usage: swap the HTTP clients for nullables in tests.

pub mod factory;
pub mod info;
pub mod platform;

pub use factory::NullClientFactory;
pub use info::NullInfo;
pub use platform::{Failure, NullPlatform};
