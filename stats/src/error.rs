//! Stats error types.

use substat_rpc::RpcError;
use substat_types::Network;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to query the API endpoint for the current validators: {0}")]
    CurrentValidators(#[source] RpcError),

    #[error("failed to query the API endpoint for the pending validators: {0}")]
    PendingValidators(#[source] RpcError),

    #[error("network {0} has no public API endpoint")]
    NoPublicEndpoint(Network),

    #[error("failed to create a client to an API endpoint")]
    NoReachableEndpoint,
}
