//! Deadlines for individual RPC calls.

use std::future::Future;
use std::time::Duration;
use substat_rpc::RpcError;

/// Run `call`, failing with [`RpcError::Timeout`] if it takes longer than `limit`.
pub async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, RpcError>
where
    F: Future<Output = Result<T, RpcError>>,
{
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| RpcError::Timeout(limit))?
}
