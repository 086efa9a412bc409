//! Rows for the validators that have staked but not started validating.

use crate::error::StatsError;
use crate::local::{version_annotation, LocalNode};
use crate::options::StatsOptions;
use crate::row::{stake_cell, PendingValidatorRow};
use crate::timeout::bounded;
use crate::weight::pending_weight;
use substat_rpc::{InfoApi, PlatformApi};
use substat_types::SubnetId;

/// Fetch the pending validators and delegators of `subnet_id` and build one
/// row per pending validator.
///
/// No pending validators is an empty result, not an error.
pub async fn build_pending_stats<P, I>(
    platform: &P,
    info: Option<&I>,
    subnet_id: &SubnetId,
    options: &StatsOptions,
) -> Result<Vec<PendingValidatorRow>, StatsError>
where
    P: PlatformApi + ?Sized,
    I: InfoApi + ?Sized,
{
    let pending = bounded(
        options.query_timeout,
        platform.get_pending_validators(subnet_id, &[]),
    )
    .await
    .map_err(StatsError::PendingValidators)?;
    tracing::debug!(
        subnet = %subnet_id,
        validators = pending.validators.len(),
        delegators = pending.delegators.len(),
        "fetched pending validators"
    );

    if pending.validators.is_empty() {
        return Ok(Vec::new());
    }

    let local = LocalNode::lookup(info, options.query_timeout).await;

    Ok(pending
        .validators
        .iter()
        .map(|v| PendingValidatorRow {
            node_id: v.node_id.to_string(),
            stake: stake_cell(v.stake_amount),
            weight: pending_weight(
                &v.node_id,
                v.weight,
                &pending.delegators,
                options.delegator_scope,
            )
            .to_string(),
            start_time: v.start_time.format(options.time_format),
            end_time: v.end_time.format(options.time_format),
            vm_version: version_annotation(local.as_ref(), &v.node_id),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DelegatorScope;
    use substat_nullables::{Failure, NullInfo, NullPlatform};
    use substat_rpc::{PendingSet, RpcError};
    use substat_types::{Delegator, NodeId, PendingValidator, TimeFormat, Timestamp};

    const A: &str = "NodeID-5mb46qkSBj81k9g9e4VFjGGSbaaSLFRzD";
    const B: &str = "NodeID-7Xhw2mDxuDS44j42TCB6U5579esbSt3Lg";

    fn node(s: &str) -> NodeId {
        NodeId::new(s).unwrap()
    }

    fn pending_validator(id: &str, weight: u64) -> PendingValidator {
        PendingValidator {
            node_id: node(id),
            tx_id: None,
            start_time: Timestamp::new(1_700_000_000),
            end_time: Timestamp::new(1_700_086_400),
            weight,
            stake_amount: Some(weight * 1_000),
            delegation_fee: None,
        }
    }

    fn delegator(id: &str, weight: u64) -> Delegator {
        Delegator {
            node_id: node(id),
            tx_id: None,
            start_time: Timestamp::EPOCH,
            end_time: Timestamp::EPOCH,
            weight,
            stake_amount: None,
        }
    }

    fn utc() -> StatsOptions {
        StatsOptions {
            time_format: TimeFormat::Utc,
            ..StatsOptions::default()
        }
    }

    #[tokio::test]
    async fn empty_pending_set_is_no_rows() {
        let platform = NullPlatform::new();
        let info = NullInfo::new(node(A), []);
        let rows = build_pending_stats(&platform, Some(&info), &SubnetId::empty(), &utc())
            .await
            .unwrap();
        assert!(rows.is_empty());
        // nothing to annotate, so the info client is left alone
        assert!(info.calls().is_empty());
    }

    #[tokio::test]
    async fn builds_rows_with_formatted_times() {
        let platform = NullPlatform::new().with_pending(PendingSet {
            validators: vec![pending_validator(A, 20)],
            delegators: Vec::new(),
        });
        let info = NullInfo::new(node(A), [("evm", "v0.13.2")]);

        let rows = build_pending_stats(&platform, Some(&info), &SubnetId::empty(), &utc())
            .await
            .unwrap();
        assert_eq!(
            rows,
            vec![PendingValidatorRow {
                node_id: A.to_string(),
                stake: "20000".into(),
                weight: "20".into(),
                start_time: "2023-11-14 22:13:20 UTC".into(),
                end_time: "2023-11-15 22:13:20 UTC".into(),
                vm_version: "evm: v0.13.2\n".into(),
            }]
        );
    }

    #[tokio::test]
    async fn delegator_scope_controls_weight() {
        let set = PendingSet {
            validators: vec![pending_validator(A, 10), pending_validator(B, 10)],
            delegators: vec![delegator(A, 5), delegator(B, 7)],
        };
        let platform = NullPlatform::new().with_pending(set);

        let subnet = SubnetId::empty();
        let global = build_pending_stats::<_, NullInfo>(&platform, None, &subnet, &utc())
            .await
            .unwrap();
        assert_eq!(global[0].weight, "22");
        assert_eq!(global[1].weight, "22");

        let options = StatsOptions {
            delegator_scope: DelegatorScope::PerValidator,
            ..utc()
        };
        let scoped = build_pending_stats::<_, NullInfo>(&platform, None, &subnet, &options)
            .await
            .unwrap();
        assert_eq!(scoped[0].weight, "15");
        assert_eq!(scoped[1].weight, "17");
    }

    #[tokio::test]
    async fn schema_mismatch_names_observed_type() {
        let platform = NullPlatform::new().failing_with(Failure::UnexpectedType {
            expected: "PendingValidator",
            found: "number",
        });
        let err = build_pending_stats::<_, NullInfo>(&platform, None, &SubnetId::empty(), &utc())
            .await
            .unwrap_err();
        match &err {
            StatsError::PendingValidators(RpcError::UnexpectedType { expected, found, .. }) => {
                assert_eq!(*expected, "PendingValidator");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(message.starts_with("failed to query the API endpoint for the pending validators"));
        assert!(message.contains("but got number"));
    }

    #[tokio::test]
    async fn missing_stake_reads_not_available() {
        let mut v = pending_validator(B, 3);
        v.stake_amount = None;
        let platform = NullPlatform::new().with_pending(PendingSet {
            validators: vec![v],
            delegators: Vec::new(),
        });
        let rows = build_pending_stats::<_, NullInfo>(&platform, None, &SubnetId::empty(), &utc())
            .await
            .unwrap();
        assert_eq!(rows[0].stake, "N/A");
        assert_eq!(rows[0].vm_version, "");
    }
}
