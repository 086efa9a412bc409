//! Rows for the validators currently validating a subnet.

use crate::error::StatsError;
use crate::local::{version_annotation, LocalNode};
use crate::options::StatsOptions;
use crate::row::{connected_cell, stake_cell, CurrentValidatorRow};
use crate::timeout::bounded;
use crate::weight::current_weight;
use substat_rpc::{InfoApi, PlatformApi};
use substat_types::{CurrentValidator, SubnetId};
use substat_utils::format_duration;

/// Fetch the current validator set of `subnet_id` and build one row per
/// validator, in the order the node returned them.
///
/// A failed fetch is fatal; a failed local-node lookup only leaves the
/// version column empty.
pub async fn build_current_stats<P, I>(
    platform: &P,
    info: Option<&I>,
    subnet_id: &SubnetId,
    options: &StatsOptions,
) -> Result<Vec<CurrentValidatorRow>, StatsError>
where
    P: PlatformApi + ?Sized,
    I: InfoApi + ?Sized,
{
    let validators = bounded(
        options.query_timeout,
        platform.get_current_validators(subnet_id, &[]),
    )
    .await
    .map_err(StatsError::CurrentValidators)?;
    tracing::debug!(subnet = %subnet_id, count = validators.len(), "fetched current validators");

    let local = LocalNode::lookup(info, options.query_timeout).await;

    Ok(validators
        .iter()
        .map(|v| current_row(v, local.as_ref()))
        .collect())
}

fn current_row(validator: &CurrentValidator, local: Option<&LocalNode>) -> CurrentValidatorRow {
    CurrentValidatorRow {
        node_id: validator.node_id.to_string(),
        connected: connected_cell(validator.connected),
        stake: stake_cell(validator.stake_amount),
        weight: current_weight(validator).to_string(),
        remaining: format_duration(validator.start_time.seconds_until(validator.end_time)),
        vm_version: version_annotation(local, &validator.node_id),
    }
}
