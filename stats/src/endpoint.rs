//! Choosing which node to query.
//!
//! Candidates are tried in a fixed order: the local node first, then the
//! network's public endpoint. The first candidate whose probes succeed wins.
//! Probe failures are logged and swallowed; only running out of candidates
//! is an error.

use crate::error::StatsError;
use crate::timeout::bounded;
use std::fmt;
use std::time::Duration;
use substat_rpc::{ClientFactory, InfoApi, PlatformApi};
use substat_types::network::LOCAL_API_ENDPOINT;
use substat_types::Network;

/// Deadline for each liveness probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Which candidate endpoint was picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointSource {
    Local,
    Public,
}

impl EndpointSource {
    const ORDER: [EndpointSource; 2] = [EndpointSource::Local, EndpointSource::Public];
}

impl fmt::Display for EndpointSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Public => write!(f, "public"),
        }
    }
}

/// Clients bound to the endpoint a run will query.
pub struct ResolvedEndpoint<P, I> {
    pub source: EndpointSource,
    pub url: String,
    pub platform: P,
    /// Info client on the local node; `None` when it could not be built.
    pub info: Option<I>,
}

#[derive(Clone, Debug)]
pub struct EndpointResolver {
    local_url: String,
    probe_timeout: Duration,
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new(LOCAL_API_ENDPOINT, DEFAULT_PROBE_TIMEOUT)
    }
}

impl EndpointResolver {
    pub fn new(local_url: impl Into<String>, probe_timeout: Duration) -> Self {
        Self {
            local_url: local_url.into(),
            probe_timeout,
        }
    }

    pub fn local_url(&self) -> &str {
        &self.local_url
    }

    /// Pick the endpoint to query for `network`.
    pub async fn resolve<F: ClientFactory>(
        &self,
        factory: &F,
        network: Network,
    ) -> Result<ResolvedEndpoint<F::Platform, F::Info>, StatsError> {
        for source in EndpointSource::ORDER {
            let resolved = match source {
                EndpointSource::Local => self.try_local(factory).await,
                EndpointSource::Public => self.try_public(factory, network).await?,
            };
            if let Some(resolved) = resolved {
                tracing::info!(
                    source = %resolved.source,
                    url = %resolved.url,
                    network = %network,
                    "using API endpoint"
                );
                return Ok(resolved);
            }
        }
        Err(StatsError::NoReachableEndpoint)
    }

    /// The local node, if both its platform and info APIs answer.
    async fn try_local<F: ClientFactory>(
        &self,
        factory: &F,
    ) -> Option<ResolvedEndpoint<F::Platform, F::Info>> {
        let url = self.local_url.as_str();
        let platform = self.probe_platform(factory, url).await?;

        let info = match factory.info_client(url) {
            Ok(info) => info,
            Err(e) => {
                tracing::debug!(url, error = %e, "cannot build local info client");
                return None;
            }
        };
        if let Err(e) = bounded(self.probe_timeout, info.get_node_id()).await {
            tracing::debug!(url, error = %e, "local info API did not answer");
            return None;
        }

        Some(ResolvedEndpoint {
            source: EndpointSource::Local,
            url: url.to_string(),
            platform,
            info: Some(info),
        })
    }

    /// The public endpoint of `network`, with a best-effort local info client.
    async fn try_public<F: ClientFactory>(
        &self,
        factory: &F,
        network: Network,
    ) -> Result<Option<ResolvedEndpoint<F::Platform, F::Info>>, StatsError> {
        let url = network
            .public_endpoint()
            .ok_or(StatsError::NoPublicEndpoint(network))?;
        let Some(platform) = self.probe_platform(factory, url).await else {
            return Ok(None);
        };
        let info = factory
            .info_client(&self.local_url)
            .map_err(|e| tracing::debug!(error = %e, "no local info client"))
            .ok();
        Ok(Some(ResolvedEndpoint {
            source: EndpointSource::Public,
            url: url.to_string(),
            platform,
            info,
        }))
    }

    async fn probe_platform<F: ClientFactory>(
        &self,
        factory: &F,
        url: &str,
    ) -> Option<F::Platform> {
        let platform = match factory.platform_client(url) {
            Ok(platform) => platform,
            Err(e) => {
                tracing::debug!(url, error = %e, "cannot build platform client");
                return None;
            }
        };
        match bounded(self.probe_timeout, platform.get_height()).await {
            Ok(height) => {
                tracing::debug!(url, height, "platform API answered");
                Some(platform)
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "platform API did not answer");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use substat_nullables::{NullClientFactory, NullInfo, NullPlatform};
    use substat_types::NodeId;

    const LOCAL: &str = "http://127.0.0.1:9650";
    const FUJI: &str = "https://api.avax-test.network";

    fn node() -> NodeId {
        NodeId::new("NodeID-5mb46qkSBj81k9g9e4VFjGGSbaaSLFRzD").unwrap()
    }

    fn resolver() -> EndpointResolver {
        EndpointResolver::new(LOCAL, DEFAULT_PROBE_TIMEOUT)
    }

    #[tokio::test]
    async fn prefers_a_healthy_local_node() {
        let factory = NullClientFactory::new()
            .with_platform(LOCAL, NullPlatform::new())
            .with_info(LOCAL, NullInfo::new(node(), []))
            .with_platform(FUJI, NullPlatform::new());

        let resolved = resolver().resolve(&factory, Network::Fuji).await.unwrap();
        assert_eq!(resolved.source, EndpointSource::Local);
        assert_eq!(resolved.url, LOCAL);
        assert!(resolved.info.is_some());
        assert_eq!(
            factory.built(),
            vec![format!("platform {LOCAL}"), format!("info {LOCAL}")]
        );
    }

    #[tokio::test]
    async fn falls_back_to_public_without_local_node() {
        let public = NullPlatform::new();
        let factory = NullClientFactory::new().with_platform(FUJI, public.clone());

        let resolved = resolver().resolve(&factory, Network::Fuji).await.unwrap();
        assert_eq!(resolved.source, EndpointSource::Public);
        assert_eq!(resolved.url, FUJI);
        assert!(resolved.info.is_some());
        assert_eq!(public.calls(), vec!["get_height"]);
    }

    #[tokio::test]
    async fn local_info_failure_also_falls_back() {
        let local = NullPlatform::new();
        let factory = NullClientFactory::new()
            .with_platform(LOCAL, local.clone())
            .with_platform(FUJI, NullPlatform::new());

        let resolved = resolver().resolve(&factory, Network::Fuji).await.unwrap();
        assert_eq!(resolved.source, EndpointSource::Public);
        assert_eq!(local.calls(), vec!["get_height"]);
    }

    #[tokio::test]
    async fn public_fallback_without_local_info_client() {
        let factory = NullClientFactory::new()
            .with_platform(FUJI, NullPlatform::new())
            .failing_info(LOCAL);

        let resolved = resolver().resolve(&factory, Network::Fuji).await.unwrap();
        assert_eq!(resolved.source, EndpointSource::Public);
        assert!(resolved.info.is_none());
    }

    #[tokio::test]
    async fn mainnet_uses_its_own_public_endpoint() {
        let factory = NullClientFactory::new()
            .with_platform("https://api.avax.network", NullPlatform::new());
        let resolved = resolver().resolve(&factory, Network::Mainnet).await.unwrap();
        assert_eq!(resolved.url, "https://api.avax.network");
    }

    #[tokio::test]
    async fn network_without_public_endpoint() {
        let factory = NullClientFactory::new();
        let err = resolver().resolve(&factory, Network::Local).await.err().unwrap();
        assert!(matches!(err, StatsError::NoPublicEndpoint(Network::Local)));
    }

    #[tokio::test]
    async fn nothing_reachable() {
        let factory = NullClientFactory::new();
        let err = resolver().resolve(&factory, Network::Fuji).await.err().unwrap();
        assert!(matches!(err, StatsError::NoReachableEndpoint));
        assert_eq!(err.to_string(), "failed to create a client to an API endpoint");
    }

    #[tokio::test(start_paused = true)]
    async fn hung_local_node_is_skipped() {
        let factory = NullClientFactory::new()
            .with_platform(LOCAL, NullPlatform::new().with_delay(Duration::from_secs(30)))
            .with_info(LOCAL, NullInfo::new(node(), []))
            .with_platform(FUJI, NullPlatform::new());

        let resolved = resolver().resolve(&factory, Network::Fuji).await.unwrap();
        assert_eq!(resolved.source, EndpointSource::Public);
    }
}
