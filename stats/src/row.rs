//! Table rows, as display strings.

/// Placeholder for values the node did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// A row of a stats table.
pub trait StatsRow {
    /// Column titles, same length as [`StatsRow::cells`].
    const HEADER: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// One validator currently validating the subnet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentValidatorRow {
    pub node_id: String,
    pub connected: String,
    pub stake: String,
    pub weight: String,
    pub remaining: String,
    pub vm_version: String,
}

impl StatsRow for CurrentValidatorRow {
    const HEADER: &'static [&'static str] =
        &["nodeID", "connected", "stake", "weight", "remaining", "vmversion"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.node_id.clone(),
            self.connected.clone(),
            self.stake.clone(),
            self.weight.clone(),
            self.remaining.clone(),
            self.vm_version.clone(),
        ]
    }
}

/// One validator staked but not yet validating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingValidatorRow {
    pub node_id: String,
    pub stake: String,
    pub weight: String,
    pub start_time: String,
    pub end_time: String,
    pub vm_version: String,
}

impl StatsRow for PendingValidatorRow {
    const HEADER: &'static [&'static str] =
        &["nodeID", "stake", "weight", "start-time", "end-time", "vmversion"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.node_id.clone(),
            self.stake.clone(),
            self.weight.clone(),
            self.start_time.clone(),
            self.end_time.clone(),
            self.vm_version.clone(),
        ]
    }
}

/// `"true"`/`"false"`, or [`NOT_AVAILABLE`].
pub(crate) fn connected_cell(connected: Option<bool>) -> String {
    connected.map_or_else(|| NOT_AVAILABLE.to_string(), |c| c.to_string())
}

/// Decimal stake amount, or [`NOT_AVAILABLE`].
pub(crate) fn stake_cell(stake: Option<u64>) -> String {
    stake.map_or_else(|| NOT_AVAILABLE.to_string(), |s| s.to_string())
}
