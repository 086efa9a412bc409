//! Weight aggregation.
//!
//! Sums are taken in 128 bits: own weight plus any number of `u64`
//! delegations stays exact.

use substat_types::{CurrentValidator, Delegator, NodeId};

use crate::options::DelegatorScope;

/// Own weight plus the weight of every delegation in `delegators`.
pub fn total_weight<'a>(own: u64, delegators: impl IntoIterator<Item = &'a Delegator>) -> u128 {
    delegators
        .into_iter()
        .fold(u128::from(own), |acc, d| acc + u128::from(d.weight))
}

/// Total weight of a current validator, including its delegators.
pub fn current_weight(validator: &CurrentValidator) -> u128 {
    total_weight(validator.weight, &validator.delegators)
}

/// Total weight of a pending validator given the pending delegators of the subnet.
pub fn pending_weight(
    node_id: &NodeId,
    own: u64,
    delegators: &[Delegator],
    scope: DelegatorScope,
) -> u128 {
    match scope {
        DelegatorScope::Global => total_weight(own, delegators),
        DelegatorScope::PerValidator => {
            total_weight(own, delegators.iter().filter(|d| &d.node_id == node_id))
        }
    }
}
