//! Node info client.

use crate::error::RpcError;
use crate::jsonrpc::JsonRpcTransport;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use substat_types::NodeId;

/// Path of the info API under a node's base URL.
pub const INFO_PATH: &str = "/ext/info";

/// Reply to `info.getNodeID`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeIdReply {
    #[serde(rename = "nodeID")]
    pub node_id: NodeId,
    /// Proof of possession of the node's BLS key, when it has one.
    #[serde(rename = "nodePOP", default, skip_serializing_if = "Option::is_none")]
    pub node_pop: Option<serde_json::Value>,
}

/// Reply to `info.getNodeVersion`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeVersion {
    pub version: String,
    #[serde(default)]
    pub database_version: String,
    #[serde(default)]
    pub git_commit: String,
    /// VM name or ID to the version of that VM the node runs.
    #[serde(default)]
    pub vm_versions: BTreeMap<String, String>,
}

/// Queries about the node answering the request.
#[async_trait]
pub trait InfoApi: Send + Sync {
    async fn get_node_id(&self) -> Result<NodeIdReply, RpcError>;

    async fn get_node_version(&self) -> Result<NodeVersion, RpcError>;
}

/// HTTP client for the info API of one node.
pub struct InfoClient {
    transport: JsonRpcTransport,
}

impl InfoClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RpcError> {
        Ok(Self {
            transport: JsonRpcTransport::new(base_url, INFO_PATH, timeout)?,
        })
    }

    pub fn url(&self) -> &str {
        self.transport.url()
    }
}

#[async_trait]
impl InfoApi for InfoClient {
    async fn get_node_id(&self) -> Result<NodeIdReply, RpcError> {
        self.transport
            .call("info.getNodeID", serde_json::json!({}))
            .await
    }

    async fn get_node_version(&self) -> Result<NodeVersion, RpcError> {
        self.transport
            .call("info.getNodeVersion", serde_json::json!({}))
            .await
    }
}
