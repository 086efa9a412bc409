//! Validator and delegator records as reported by the platform chain.
//!
//! Field names follow the JSON the node returns (`nodeID`, `startTime`, ...);
//! integers arrive as decimal strings.

use crate::ids::NodeId;
use crate::serde_str;
use crate::time::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

fn timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<Timestamp, D::Error> {
    serde_str::deserialize(d).map(Timestamp::new)
}

fn serialize_timestamp<S: serde::Serializer>(ts: &Timestamp, s: S) -> Result<S::Ok, S::Error> {
    serde_str::serialize(&ts.as_secs(), s)
}

fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

/// A validator currently validating a subnet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentValidator {
    #[serde(rename = "nodeID")]
    pub node_id: NodeId,
    #[serde(rename = "txID", default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    #[serde(deserialize_with = "timestamp", serialize_with = "serialize_timestamp")]
    pub start_time: Timestamp,
    #[serde(deserialize_with = "timestamp", serialize_with = "serialize_timestamp")]
    pub end_time: Timestamp,
    /// The validator's own weight, excluding delegations.
    #[serde(default, with = "serde_str")]
    pub weight: u64,
    #[serde(default, with = "serde_str::option")]
    pub stake_amount: Option<u64>,
    /// Whether the queried node is connected to this validator; not every
    /// node reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegation_fee: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub delegators: Vec<Delegator>,
}

/// A validator that has staked but whose validation period has not started.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingValidator {
    #[serde(rename = "nodeID")]
    pub node_id: NodeId,
    #[serde(rename = "txID", default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    #[serde(deserialize_with = "timestamp", serialize_with = "serialize_timestamp")]
    pub start_time: Timestamp,
    #[serde(deserialize_with = "timestamp", serialize_with = "serialize_timestamp")]
    pub end_time: Timestamp,
    #[serde(default, with = "serde_str")]
    pub weight: u64,
    #[serde(default, with = "serde_str::option")]
    pub stake_amount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegation_fee: Option<String>,
}

/// Stake delegated to the validator running `node_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegator {
    #[serde(rename = "nodeID")]
    pub node_id: NodeId,
    #[serde(rename = "txID", default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    #[serde(deserialize_with = "timestamp", serialize_with = "serialize_timestamp")]
    pub start_time: Timestamp,
    #[serde(deserialize_with = "timestamp", serialize_with = "serialize_timestamp")]
    pub end_time: Timestamp,
    #[serde(default, with = "serde_str")]
    pub weight: u64,
    #[serde(default, with = "serde_str::option")]
    pub stake_amount: Option<u64>,
}
