//! Identity of the node answering our queries.
//!
//! When the node we query is itself one of the subnet's validators, its rows
//! are annotated with the VM versions it runs. Looking this up is best-effort:
//! any failure simply means no annotation.

use crate::timeout::bounded;
use std::collections::BTreeMap;
use std::time::Duration;
use substat_rpc::InfoApi;
use substat_types::NodeId;

/// The queried node's ID and the versions of the VMs it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalNode {
    pub node_id: NodeId,
    pub vm_versions: BTreeMap<String, String>,
}

impl LocalNode {
    /// One `"<vm>: <version>\n"` line per VM, ordered by VM key.
    pub fn version_lines(&self) -> String {
        self.vm_versions
            .iter()
            .map(|(vm, version)| format!("{vm}: {version}\n"))
            .collect()
    }

    /// Version annotation for the row of `node_id`: empty unless it is us.
    pub fn annotation_for(&self, node_id: &NodeId) -> String {
        if &self.node_id == node_id {
            self.version_lines()
        } else {
            String::new()
        }
    }

    /// Ask `info` who it is and what it runs; `None` on any failure.
    pub async fn lookup<I>(info: Option<&I>, limit: Duration) -> Option<LocalNode>
    where
        I: InfoApi + ?Sized,
    {
        let info = info?;
        let version = match bounded(limit, info.get_node_version()).await {
            Ok(version) => version,
            Err(e) => {
                tracing::debug!(error = %e, "local node version unavailable");
                return None;
            }
        };
        match bounded(limit, info.get_node_id()).await {
            Ok(reply) => Some(LocalNode {
                node_id: reply.node_id,
                vm_versions: version.vm_versions,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "local node ID unavailable");
                None
            }
        }
    }
}

/// Annotation for `node_id` given an optional local node.
pub fn version_annotation(local: Option<&LocalNode>, node_id: &NodeId) -> String {
    local
        .map(|node| node.annotation_for(node_id))
        .unwrap_or_default()
}
