//! Sidecar files on disk.

use crate::error::SidecarError;
use crate::name::validate_subnet_name;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use substat_types::{Network, SubnetId};

/// Directory under the base dir that holds one directory per subnet.
const SUBNETS_DIR: &str = "subnets";

const SIDECAR_FILE: &str = "sidecar.json";

/// Where a subnet lives on one network.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkDeployment {
    #[serde(rename = "SubnetID")]
    pub subnet_id: SubnetId,
    #[serde(rename = "BlockchainID", default, skip_serializing_if = "Option::is_none")]
    pub blockchain_id: Option<String>,
}

/// Metadata recorded for a subnet when it is created and deployed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sidecar {
    /// Falls back to the directory name when the file omits it.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "VM", default)]
    pub vm: String,
    #[serde(default)]
    pub token_name: String,
    /// Keyed by network display name, e.g. `"Fuji"`.
    #[serde(default)]
    pub networks: HashMap<String, NetworkDeployment>,
}

impl Sidecar {
    /// Subnet ID on `network`; an empty ID counts as not deployed.
    pub fn subnet_id(&self, network: Network) -> Result<&SubnetId, SidecarError> {
        match self.networks.get(network.name()) {
            Some(deployment) if !deployment.subnet_id.is_empty() => Ok(&deployment.subnet_id),
            _ => Err(SidecarError::NotDeployed {
                name: self.name.clone(),
                network: network.name().to_string(),
            }),
        }
    }
}

/// Reads sidecars below a base directory (`<base>/subnets/<name>/sidecar.json`).
#[derive(Clone, Debug)]
pub struct SidecarStore {
    base_dir: PathBuf,
}

impl SidecarStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn sidecar_path(&self, subnet_name: &str) -> PathBuf {
        self.base_dir
            .join(SUBNETS_DIR)
            .join(subnet_name)
            .join(SIDECAR_FILE)
    }

    /// Load the sidecar of `subnet_name`.
    pub fn load(&self, subnet_name: &str) -> Result<Sidecar, SidecarError> {
        validate_subnet_name(subnet_name)?;
        let path = self.sidecar_path(subnet_name);
        let shown = path.display().to_string();

        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SidecarError::NotFound {
                    name: subnet_name.to_string(),
                    path: shown.clone(),
                }
            } else {
                SidecarError::Io {
                    path: shown.clone(),
                    reason: e.to_string(),
                }
            }
        })?;

        let mut sidecar: Sidecar =
            serde_json::from_str(&content).map_err(|e| SidecarError::Parse {
                path: shown.clone(),
                reason: e.to_string(),
            })?;
        if sidecar.name.is_empty() {
            sidecar.name = subnet_name.to_string();
        }
        tracing::debug!(path = %shown, networks = sidecar.networks.len(), "loaded sidecar");
        Ok(sidecar)
    }

    /// Subnet ID of `subnet_name` on `network`.
    pub fn subnet_id(&self, subnet_name: &str, network: Network) -> Result<SubnetId, SidecarError> {
        self.load(subnet_name)?.subnet_id(network).cloned()
    }

    /// Write `sidecar` under its own name, creating directories as needed.
    pub fn save(&self, sidecar: &Sidecar) -> Result<PathBuf, SidecarError> {
        validate_subnet_name(&sidecar.name)?;
        let path = self.sidecar_path(&sidecar.name);
        let io_err = |e: std::io::Error| SidecarError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(sidecar).map_err(|e| SidecarError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(&path, json).map_err(io_err)?;
        Ok(path)
    }
}
