//! Knobs for a stats run.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use substat_types::TimeFormat;

/// Deadline for the validator-set queries.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Which pending delegators count towards a pending validator's weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelegatorScope {
    /// Every pending delegator of the subnet, whichever validator it names.
    #[default]
    Global,
    /// Only delegators naming the validator's node ID.
    PerValidator,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsOptions {
    /// Deadline applied to each RPC call a builder makes.
    pub query_timeout: Duration,
    /// Zone for pending start and end times.
    pub time_format: TimeFormat,
    pub delegator_scope: DelegatorScope,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            time_format: TimeFormat::Local,
            delegator_scope: DelegatorScope::Global,
        }
    }
}
