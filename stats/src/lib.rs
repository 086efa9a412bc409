//! Validator statistics for a subnet.
//!
//! Two procedures make up a stats run:
//! - [`EndpointResolver`] picks the node to ask: the local node when it
//!   answers, otherwise the network's public endpoint.
//! - [`build_current_stats`] and [`build_pending_stats`] fetch the validator
//!   sets through the resolved clients and turn each record into a row of
//!   display strings.
//!
//! Everything is fetched fresh per run; nothing here caches.

pub mod current;
pub mod endpoint;
pub mod error;
pub mod local;
pub mod options;
pub mod pending;
pub mod row;
pub mod timeout;
pub mod weight;

pub use current::build_current_stats;
pub use endpoint::{EndpointResolver, EndpointSource, ResolvedEndpoint};
pub use error::StatsError;
pub use local::LocalNode;
pub use options::{DelegatorScope, StatsOptions};
pub use pending::build_pending_stats;
pub use row::{CurrentValidatorRow, PendingValidatorRow, StatsRow, NOT_AVAILABLE};
