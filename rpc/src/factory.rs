//! Construction of API clients for a base URL.

use crate::error::RpcError;
use crate::info::{InfoApi, InfoClient};
use crate::jsonrpc::DEFAULT_TIMEOUT;
use crate::platform::{PlatformApi, PlatformClient};
use std::time::Duration;

/// Builds platform and info clients bound to a node's base URL.
pub trait ClientFactory {
    type Platform: PlatformApi;
    type Info: InfoApi;

    fn platform_client(&self, base_url: &str) -> Result<Self::Platform, RpcError>;

    fn info_client(&self, base_url: &str) -> Result<Self::Info, RpcError>;
}

/// Factory for the reqwest-backed clients.
#[derive(Clone, Debug)]
pub struct HttpClientFactory {
    request_timeout: Duration,
}

impl HttpClientFactory {
    pub fn new(request_timeout: Duration) -> Self {
        Self { request_timeout }
    }
}

impl Default for HttpClientFactory {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl ClientFactory for HttpClientFactory {
    type Platform = PlatformClient;
    type Info = InfoClient;

    fn platform_client(&self, base_url: &str) -> Result<PlatformClient, RpcError> {
        PlatformClient::new(base_url, self.request_timeout)
    }

    fn info_client(&self, base_url: &str) -> Result<InfoClient, RpcError> {
        InfoClient::new(base_url, self.request_timeout)
    }
}
