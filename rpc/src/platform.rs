//! Platform chain client.

use crate::decode::decode_list;
use crate::error::RpcError;
use crate::jsonrpc::JsonRpcTransport;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use substat_types::{serde_str, CurrentValidator, Delegator, NodeId, PendingValidator, SubnetId};

/// Path of the platform chain API under a node's base URL.
pub const PLATFORM_PATH: &str = "/ext/bc/P";

/// Validators and delegators that have staked but not yet started.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingSet {
    pub validators: Vec<PendingValidator>,
    pub delegators: Vec<Delegator>,
}

/// Queries against the platform chain.
#[async_trait]
pub trait PlatformApi: Send + Sync {
    /// Height of the last accepted block; doubles as a liveness probe.
    async fn get_height(&self) -> Result<u64, RpcError>;

    /// Current validators of `subnet_id`. An empty `node_ids` means all of them.
    async fn get_current_validators(
        &self,
        subnet_id: &SubnetId,
        node_ids: &[NodeId],
    ) -> Result<Vec<CurrentValidator>, RpcError>;

    /// Pending validators and delegators of `subnet_id`.
    async fn get_pending_validators(
        &self,
        subnet_id: &SubnetId,
        node_ids: &[NodeId],
    ) -> Result<PendingSet, RpcError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidatorsParams<'a> {
    #[serde(rename = "subnetID")]
    subnet_id: &'a SubnetId,
    #[serde(rename = "nodeIDs")]
    node_ids: &'a [NodeId],
}

#[derive(Deserialize)]
struct HeightReply {
    #[serde(with = "serde_str")]
    height: u64,
}

#[derive(Deserialize)]
struct CurrentValidatorsReply {
    validators: Vec<CurrentValidator>,
}

#[derive(Deserialize)]
struct PendingValidatorsReply {
    #[serde(default)]
    validators: Option<Vec<Value>>,
    #[serde(default)]
    delegators: Option<Vec<Value>>,
}

/// HTTP client for the platform chain API of one node.
pub struct PlatformClient {
    transport: JsonRpcTransport,
}

impl PlatformClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RpcError> {
        Ok(Self {
            transport: JsonRpcTransport::new(base_url, PLATFORM_PATH, timeout)?,
        })
    }

    pub fn url(&self) -> &str {
        self.transport.url()
    }
}

#[async_trait]
impl PlatformApi for PlatformClient {
    async fn get_height(&self) -> Result<u64, RpcError> {
        let reply: HeightReply = self
            .transport
            .call("platform.getHeight", serde_json::json!({}))
            .await?;
        Ok(reply.height)
    }

    async fn get_current_validators(
        &self,
        subnet_id: &SubnetId,
        node_ids: &[NodeId],
    ) -> Result<Vec<CurrentValidator>, RpcError> {
        let reply: CurrentValidatorsReply = self
            .transport
            .call(
                "platform.getCurrentValidators",
                ValidatorsParams {
                    subnet_id,
                    node_ids,
                },
            )
            .await?;
        Ok(reply.validators)
    }

    async fn get_pending_validators(
        &self,
        subnet_id: &SubnetId,
        node_ids: &[NodeId],
    ) -> Result<PendingSet, RpcError> {
        let reply: PendingValidatorsReply = self
            .transport
            .call(
                "platform.getPendingValidators",
                ValidatorsParams {
                    subnet_id,
                    node_ids,
                },
            )
            .await?;
        Ok(PendingSet {
            validators: decode_list(reply.validators.unwrap_or_default(), "PendingValidator")?,
            delegators: decode_list(reply.delegators.unwrap_or_default(), "Delegator")?,
        })
    }
}
