//! Nullable node info client.

use crate::platform::Failure;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use substat_rpc::{InfoApi, NodeIdReply, NodeVersion, RpcError};
use substat_types::NodeId;

struct State {
    node_id: NodeId,
    version: NodeVersion,
    node_id_failure: Option<Failure>,
    version_failure: Option<Failure>,
    calls: Vec<&'static str>,
}

/// An info client describing a fixed node.
#[derive(Clone)]
pub struct NullInfo {
    state: Arc<Mutex<State>>,
}

impl NullInfo {
    /// A node with identity `node_id` running the given VM versions.
    pub fn new<'a>(
        node_id: NodeId,
        vm_versions: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let vm_versions: BTreeMap<String, String> = vm_versions
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            state: Arc::new(Mutex::new(State {
                node_id,
                version: NodeVersion {
                    version: "avalanche/1.11.3".to_string(),
                    vm_versions,
                    ..NodeVersion::default()
                },
                node_id_failure: None,
                version_failure: None,
                calls: Vec::new(),
            })),
        }
    }

    /// A node that cannot be reached at all.
    pub fn unreachable(node_id: NodeId) -> Self {
        Self::new(node_id, [])
            .failing_node_id(Failure::Unreachable)
            .failing_version(Failure::Unreachable)
    }

    pub fn failing_node_id(self, failure: Failure) -> Self {
        self.state.lock().unwrap().node_id_failure = Some(failure);
        self
    }

    pub fn failing_version(self, failure: Failure) -> Self {
        self.state.lock().unwrap().version_failure = Some(failure);
        self
    }

    /// Methods called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl InfoApi for NullInfo {
    async fn get_node_id(&self) -> Result<NodeIdReply, RpcError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("get_node_id");
        match &state.node_id_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(NodeIdReply {
                node_id: state.node_id.clone(),
                node_pop: None,
            }),
        }
    }

    async fn get_node_version(&self) -> Result<NodeVersion, RpcError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("get_node_version");
        match &state.version_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(state.version.clone()),
        }
    }
}
