//! `substat stats <subnetName>`

use anyhow::Context;
use std::io::{self, Write};
use std::time::Duration;

use crate::args::{prompt_network, StatsArgs};
use crate::config::CliConfig;
use crate::render::{write_heading, write_table};
use substat_rpc::{ClientFactory, HttpClientFactory};
use substat_stats::{build_current_stats, build_pending_stats, StatsError};
use substat_types::Network;

pub const CURRENT_HEADING: &str = "Current validators (already validating the subnet)";
pub const PENDING_HEADING: &str = "Pending validators (not yet validating the subnet)";
pub const NO_PENDING: &str = "No pending validators found.";

pub async fn run(args: StatsArgs, config: &CliConfig) -> anyhow::Result<()> {
    let network = match args.network_flag() {
        Some(network) => network,
        None => prompt_network().context("failed to select a network")?,
    };
    let factory = HttpClientFactory::new(Duration::from_secs(config.query_timeout_secs));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_stats(&factory, config, &args.subnet_name, network, &mut out).await
}

/// Print the current and pending validator tables of `subnet_name`.
///
/// A failed table does not stop the other one from being attempted; the
/// command still fails afterwards. Only tables that were built get a heading.
pub async fn print_stats<F: ClientFactory>(
    factory: &F,
    config: &CliConfig,
    subnet_name: &str,
    network: Network,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let subnet_id = config.sidecar_store().subnet_id(subnet_name, network)?;
    tracing::debug!(subnet = subnet_name, %subnet_id, %network, "loaded subnet");

    let endpoint = config.endpoint_resolver().resolve(factory, network).await?;
    let options = config.stats_options();
    let info = endpoint.info.as_ref();
    let mut failures: Vec<StatsError> = Vec::new();

    match build_current_stats(&endpoint.platform, info, &subnet_id, &options).await {
        Ok(rows) => {
            write_heading(out, CURRENT_HEADING)?;
            write_table(out, &rows)?;
            writeln!(out)?;
        }
        Err(e) => failures.push(e),
    }

    match build_pending_stats(&endpoint.platform, info, &subnet_id, &options).await {
        Ok(rows) => {
            write_heading(out, PENDING_HEADING)?;
            if rows.is_empty() {
                writeln!(out, "{NO_PENDING}")?;
            } else {
                write_table(out, &rows)?;
            }
        }
        Err(e) => failures.push(e),
    }
    out.flush()?;

    let mut failures = failures.into_iter();
    match (failures.next(), failures.next()) {
        (None, _) => Ok(()),
        (Some(e), None) => Err(e.into()),
        (Some(first), Some(second)) => Err(anyhow::anyhow!("{first}\n{second}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Overrides;
    use std::collections::HashMap;
    use std::path::Path;
    use substat_nullables::{Failure, NullClientFactory, NullInfo, NullPlatform};
    use substat_rpc::PendingSet;
    use substat_sidecar::{NetworkDeployment, Sidecar, SidecarStore};
    use substat_types::{CurrentValidator, NodeId, PendingValidator, SubnetId, Timestamp};

    const LOCAL: &str = "http://127.0.0.1:9650";
    const FUJI: &str = "https://api.avax-test.network";
    const FUJI_SUBNET: &str = "2bRCr6B4MiEfSjidDwxDpdCyviwnfUVqB2HGwhm947w9YYqb7r";
    const A: &str = "NodeID-5mb46qkSBj81k9g9e4VFjGGSbaaSLFRzD";

    fn node() -> NodeId {
        NodeId::new(A).unwrap()
    }

    fn config(base_dir: &Path) -> CliConfig {
        CliConfig::default().with_overrides(Overrides {
            base_dir: Some(base_dir.to_path_buf()),
            local_endpoint: Some(LOCAL.to_string()),
            utc: true,
            ..Overrides::default()
        })
    }

    fn deploy(base_dir: &Path) {
        let mut networks = HashMap::new();
        networks.insert(
            "Fuji".to_string(),
            NetworkDeployment {
                subnet_id: SubnetId::new(FUJI_SUBNET).unwrap(),
                blockchain_id: None,
            },
        );
        SidecarStore::new(base_dir)
            .save(&Sidecar {
                name: "mysubnet".into(),
                vm: "Subnet-EVM".into(),
                token_name: "TEST".into(),
                networks,
            })
            .unwrap();
    }

    fn current_validator() -> CurrentValidator {
        CurrentValidator {
            node_id: node(),
            tx_id: None,
            start_time: Timestamp::new(1_700_000_000),
            end_time: Timestamp::new(1_700_003_600),
            weight: 42,
            stake_amount: Some(42_000_000),
            connected: Some(true),
            uptime: None,
            delegation_fee: None,
            delegators: Vec::new(),
        }
    }

    fn local_factory(platform: NullPlatform) -> NullClientFactory {
        NullClientFactory::new()
            .with_platform(LOCAL, platform)
            .with_info(LOCAL, NullInfo::new(node(), [("evm", "v0.13.2")]))
    }

    async fn run_stats(
        factory: &NullClientFactory,
        base_dir: &Path,
    ) -> (anyhow::Result<()>, String) {
        let mut out = Vec::new();
        let config = config(base_dir);
        let result = print_stats(factory, &config, "mysubnet", Network::Fuji, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn prints_both_sections() {
        let dir = tempfile::tempdir().unwrap();
        deploy(dir.path());
        let factory = local_factory(NullPlatform::new().with_current(vec![current_validator()]));

        let (result, text) = run_stats(&factory, dir.path()).await;
        result.unwrap();
        assert!(text.starts_with(CURRENT_HEADING));
        assert!(text.contains("42000000"));
        assert!(text.contains("evm: v0.13.2"));
        assert!(text.contains(PENDING_HEADING));
        assert!(text.trim_end().ends_with(NO_PENDING));
    }

    #[tokio::test]
    async fn pending_table_uses_configured_zone() {
        let dir = tempfile::tempdir().unwrap();
        deploy(dir.path());
        let pending = PendingSet {
            validators: vec![PendingValidator {
                node_id: node(),
                tx_id: None,
                start_time: Timestamp::new(1_700_000_000),
                end_time: Timestamp::new(1_700_086_400),
                weight: 20,
                stake_amount: None,
                delegation_fee: None,
            }],
            delegators: Vec::new(),
        };
        let factory = local_factory(NullPlatform::new().with_pending(pending));

        let (result, text) = run_stats(&factory, dir.path()).await;
        result.unwrap();
        assert!(text.contains("2023-11-14 22:13:20 UTC"));
        assert!(!text.contains(NO_PENDING));
    }

    #[tokio::test]
    async fn undeployed_subnet_fails_before_any_query() {
        let dir = tempfile::tempdir().unwrap();
        let factory = local_factory(NullPlatform::new());

        let (result, text) = run_stats(&factory, dir.path()).await;
        assert!(result.is_err());
        assert!(text.is_empty());
        assert!(factory.built().is_empty());
    }

    #[tokio::test]
    async fn unreachable_network_fails() {
        let dir = tempfile::tempdir().unwrap();
        deploy(dir.path());
        let (result, _) = run_stats(&NullClientFactory::new(), dir.path()).await;
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "failed to create a client to an API endpoint");
    }

    #[tokio::test]
    async fn a_failed_table_still_fails_the_command() {
        let dir = tempfile::tempdir().unwrap();
        deploy(dir.path());
        let factory = local_factory(
            NullPlatform::new().failing_queries_with(Failure::Remote("unknown subnet".into())),
        );

        let (result, text) = run_stats(&factory, dir.path()).await;
        let err = result.unwrap_err().to_string();
        assert!(err.contains("current validators"));
        assert!(err.contains("pending validators"));
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn public_endpoint_without_local_info_leaves_versions_blank() {
        let dir = tempfile::tempdir().unwrap();
        deploy(dir.path());
        let factory = NullClientFactory::new()
            .with_platform(FUJI, NullPlatform::new().with_current(vec![current_validator()]))
            .failing_info(LOCAL);

        let (result, text) = run_stats(&factory, dir.path()).await;
        result.unwrap();
        assert!(text.contains(A));
        assert!(text.contains("42000000"));
        assert!(!text.contains("evm:"));
    }
}
