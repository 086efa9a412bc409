//! Nullable client factory: a map from base URL to nullable clients.

use crate::info::NullInfo;
use crate::platform::NullPlatform;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use substat_rpc::{ClientFactory, RpcError};
use substat_types::NodeId;

/// Hands out pre-registered nullable clients by base URL.
///
/// URLs without a registered platform client get an unreachable one, so an
/// unconfigured endpoint behaves like a node that is not running.
pub struct NullClientFactory {
    platforms: HashMap<String, NullPlatform>,
    infos: HashMap<String, NullInfo>,
    failing_infos: HashSet<String>,
    built: Mutex<Vec<String>>,
}

impl NullClientFactory {
    pub fn new() -> Self {
        Self {
            platforms: HashMap::new(),
            infos: HashMap::new(),
            failing_infos: HashSet::new(),
            built: Mutex::new(Vec::new()),
        }
    }

    pub fn with_platform(mut self, url: &str, platform: NullPlatform) -> Self {
        self.platforms.insert(url.to_string(), platform);
        self
    }

    pub fn with_info(mut self, url: &str, info: NullInfo) -> Self {
        self.infos.insert(url.to_string(), info);
        self
    }

    /// Refuse to build an info client for `url`, as when its address is invalid.
    pub fn failing_info(mut self, url: &str) -> Self {
        self.failing_infos.insert(url.to_string());
        self
    }

    /// Every client constructed so far, as `"platform <url>"` or `"info <url>"`.
    pub fn built(&self) -> Vec<String> {
        self.built.lock().unwrap().clone()
    }
}

impl Default for NullClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn placeholder_node() -> NodeId {
    NodeId::new("NodeID-111111111111111111116DBWJs").unwrap()
}

impl ClientFactory for NullClientFactory {
    type Platform = NullPlatform;
    type Info = NullInfo;

    fn platform_client(&self, base_url: &str) -> Result<NullPlatform, RpcError> {
        self.built.lock().unwrap().push(format!("platform {base_url}"));
        Ok(self
            .platforms
            .get(base_url)
            .cloned()
            .unwrap_or_else(NullPlatform::unreachable))
    }

    fn info_client(&self, base_url: &str) -> Result<NullInfo, RpcError> {
        self.built.lock().unwrap().push(format!("info {base_url}"));
        if self.failing_infos.contains(base_url) {
            return Err(RpcError::Client(format!("cannot build info client for {base_url}")));
        }
        Ok(self
            .infos
            .get(base_url)
            .cloned()
            .unwrap_or_else(|| NullInfo::unreachable(placeholder_node())))
    }
}
