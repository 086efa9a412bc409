//! Subnet sidecar metadata.
//!
//! Every subnet created by the tooling gets a `sidecar.json` recording, per
//! network, where it was deployed. The stats command reads it to turn a
//! subnet name into the subnet ID to query.

pub mod error;
pub mod name;
pub mod store;

pub use error::SidecarError;
pub use name::validate_subnet_name;
pub use store::{NetworkDeployment, Sidecar, SidecarStore};
