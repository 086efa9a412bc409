//! CLI configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use substat_sidecar::SidecarStore;
use substat_stats::{DelegatorScope, EndpointResolver, StatsOptions};
use substat_types::network::LOCAL_API_ENDPOINT;
use substat_types::TimeFormat;
use substat_utils::LogFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Settings for a `substat` run.
///
/// Loaded from a TOML file via [`CliConfig::from_toml_file`]; flags and
/// `SUBSTAT_*` environment variables are layered on top with
/// [`CliConfig::with_overrides`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Directory holding `subnets/<name>/sidecar.json`.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Base URL of the node on this machine.
    #[serde(default = "default_local_endpoint")]
    pub local_endpoint: String,

    /// Deadline for each validator-set query, in seconds.
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// Deadline for each endpoint liveness probe, in seconds.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Zone for pending start and end times: "local" or "utc".
    #[serde(default)]
    pub time_format: TimeFormat,

    /// Which pending delegators count towards a pending validator:
    /// "global" or "per_validator".
    #[serde(default)]
    pub delegator_scope: DelegatorScope,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".avalanche-cli")
}

fn default_local_endpoint() -> String {
    LOCAL_API_ENDPOINT.to_string()
}

fn default_query_timeout_secs() -> u64 {
    10
}

fn default_probe_timeout_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

/// Values given on the command line or through the environment.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub base_dir: Option<PathBuf>,
    pub local_endpoint: Option<String>,
    pub utc: bool,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn with_overrides(self, overrides: Overrides) -> Self {
        Self {
            base_dir: overrides.base_dir.unwrap_or(self.base_dir),
            local_endpoint: overrides.local_endpoint.unwrap_or(self.local_endpoint),
            time_format: if overrides.utc {
                TimeFormat::Utc
            } else {
                self.time_format
            },
            log_level: overrides.log_level.unwrap_or(self.log_level),
            log_format: overrides.log_format.unwrap_or(self.log_format),
            ..self
        }
    }

    pub fn stats_options(&self) -> StatsOptions {
        StatsOptions {
            query_timeout: Duration::from_secs(self.query_timeout_secs),
            time_format: self.time_format,
            delegator_scope: self.delegator_scope,
        }
    }

    pub fn endpoint_resolver(&self) -> EndpointResolver {
        EndpointResolver::new(
            self.local_endpoint.clone(),
            Duration::from_secs(self.probe_timeout_secs),
        )
    }

    pub fn sidecar_store(&self) -> SidecarStore {
        SidecarStore::new(&self.base_dir)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            local_endpoint: default_local_endpoint(),
            query_timeout_secs: default_query_timeout_secs(),
            probe_timeout_secs: default_probe_timeout_secs(),
            time_format: TimeFormat::default(),
            delegator_scope: DelegatorScope::default(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = CliConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serializable");
        let parsed = CliConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = CliConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.local_endpoint, "http://127.0.0.1:9650");
        assert_eq!(config.query_timeout_secs, 10);
        assert_eq!(config.probe_timeout_secs, 5);
        assert_eq!(config.time_format, TimeFormat::Local);
        assert_eq!(config.delegator_scope, DelegatorScope::Global);
        assert_eq!(config.log_level, "warn");
        assert!(config.base_dir.ends_with(".avalanche-cli"));
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            time_format = "utc"
            delegator_scope = "per_validator"
            query_timeout_secs = 30
            log_format = "json"
        "#;
        let config = CliConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.time_format, TimeFormat::Utc);
        assert_eq!(config.delegator_scope, DelegatorScope::PerValidator);
        assert_eq!(config.stats_options().query_timeout, Duration::from_secs(30));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.probe_timeout_secs, 5); // default
    }

    #[test]
    fn unknown_enum_value_is_a_parse_error() {
        let err = CliConfig::from_toml_str(r#"time_format = "martian""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_returns_read_error() {
        let result = CliConfig::from_toml_file(Path::new("/nonexistent/substat.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("substat.toml");
        std::fs::write(&path, "local_endpoint = \"http://10.0.0.2:9650\"\n").unwrap();
        let config = CliConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.local_endpoint, "http://10.0.0.2:9650");
        assert_eq!(config.endpoint_resolver().local_url(), "http://10.0.0.2:9650");
    }

    #[test]
    fn overrides_win_over_file_values() {
        let config = CliConfig::from_toml_str("log_level = \"info\"\nbase_dir = \"/srv/a\"")
            .unwrap()
            .with_overrides(Overrides {
                base_dir: Some(PathBuf::from("/srv/b")),
                utc: true,
                ..Overrides::default()
            });
        assert_eq!(config.base_dir, PathBuf::from("/srv/b"));
        assert_eq!(config.time_format, TimeFormat::Utc);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.sidecar_store().base_dir(), Path::new("/srv/b"));
    }
}
