//! Nullable platform chain client.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use substat_rpc::{PendingSet, PlatformApi, RpcError};
use substat_types::{CurrentValidator, NodeId, SubnetId};

/// How a nullable client fails when told to.
#[derive(Clone, Debug)]
pub enum Failure {
    /// Connection refused.
    Unreachable,
    /// The node answered with a JSON-RPC error object.
    Remote(String),
    /// A result element did not match the expected record type.
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
}

impl Failure {
    pub(crate) fn to_error(&self) -> RpcError {
        match self {
            Failure::Unreachable => RpcError::Unreachable("connection refused".to_string()),
            Failure::Remote(message) => RpcError::Remote {
                code: -32000,
                message: message.clone(),
            },
            Failure::UnexpectedType { expected, found } => RpcError::UnexpectedType {
                expected,
                found: found.to_string(),
                detail: "element 0: invalid type".to_string(),
            },
        }
    }
}

struct State {
    height: u64,
    current: Vec<CurrentValidator>,
    pending: PendingSet,
    failure: Option<Failure>,
    query_failure: Option<Failure>,
    delay: Option<Duration>,
    calls: Vec<&'static str>,
}

/// A platform client that replies from memory.
///
/// Clones share state, so a test can keep a handle and inspect the calls a
/// clone received.
#[derive(Clone)]
pub struct NullPlatform {
    state: Arc<Mutex<State>>,
}

impl NullPlatform {
    /// A healthy node at height 1 with no validators.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                height: 1,
                current: Vec::new(),
                pending: PendingSet::default(),
                failure: None,
                query_failure: None,
                delay: None,
                calls: Vec::new(),
            })),
        }
    }

    /// A node every call fails to reach.
    pub fn unreachable() -> Self {
        Self::new().failing_with(Failure::Unreachable)
    }

    pub fn with_height(self, height: u64) -> Self {
        self.state.lock().unwrap().height = height;
        self
    }

    pub fn with_current(self, validators: Vec<CurrentValidator>) -> Self {
        self.state.lock().unwrap().current = validators;
        self
    }

    pub fn with_pending(self, pending: PendingSet) -> Self {
        self.state.lock().unwrap().pending = pending;
        self
    }

    /// Fail every call with `failure`.
    pub fn failing_with(self, failure: Failure) -> Self {
        self.state.lock().unwrap().failure = Some(failure);
        self
    }

    /// Fail the validator-set queries with `failure` while still answering
    /// liveness probes.
    pub fn failing_queries_with(self, failure: Failure) -> Self {
        self.state.lock().unwrap().query_failure = Some(failure);
        self
    }

    /// Sleep for `delay` before answering each call.
    pub fn with_delay(self, delay: Duration) -> Self {
        self.state.lock().unwrap().delay = Some(delay);
        self
    }

    /// Methods called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Record `method` and return the configured delay and failure.
    fn enter(&self, method: &'static str) -> (Option<Duration>, Option<Failure>) {
        let mut state = self.state.lock().unwrap();
        state.calls.push(method);
        let failure = match method {
            "get_height" => state.failure.clone(),
            _ => state.failure.clone().or_else(|| state.query_failure.clone()),
        };
        (state.delay, failure)
    }

    async fn answer<T>(
        &self,
        method: &'static str,
        reply: impl FnOnce(&State) -> T + Send,
    ) -> Result<T, RpcError> {
        let (delay, failure) = self.enter(method);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(failure) = failure {
            return Err(failure.to_error());
        }
        let state = self.state.lock().unwrap();
        Ok(reply(&state))
    }
}

impl Default for NullPlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformApi for NullPlatform {
    async fn get_height(&self) -> Result<u64, RpcError> {
        self.answer("get_height", |s| s.height).await
    }

    async fn get_current_validators(
        &self,
        _subnet_id: &SubnetId,
        node_ids: &[NodeId],
    ) -> Result<Vec<CurrentValidator>, RpcError> {
        let filter = node_ids.to_vec();
        self.answer("get_current_validators", move |s| {
            s.current
                .iter()
                .filter(|v| filter.is_empty() || filter.contains(&v.node_id))
                .cloned()
                .collect()
        })
        .await
    }

    async fn get_pending_validators(
        &self,
        _subnet_id: &SubnetId,
        node_ids: &[NodeId],
    ) -> Result<PendingSet, RpcError> {
        let filter = node_ids.to_vec();
        self.answer("get_pending_validators", move |s| PendingSet {
            validators: s
                .pending
                .validators
                .iter()
                .filter(|v| filter.is_empty() || filter.contains(&v.node_id))
                .cloned()
                .collect(),
            delegators: s.pending.delegators.clone(),
        })
        .await
    }
}
