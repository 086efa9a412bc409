//! Network identifier.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Address of a node running on the operator's own machine.
pub const LOCAL_API_ENDPOINT: &str = "http://127.0.0.1:9650";

/// Identifies which network a command operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// The production network.
    Mainnet,
    /// The public test network.
    Fuji,
    /// A network run on the operator's machine.
    Local,
}

impl Network {
    /// Networks whose statistics can be queried through a public endpoint.
    pub const PUBLIC: [Network; 2] = [Network::Fuji, Network::Mainnet];

    /// Numeric network ID.
    pub fn network_id(&self) -> u32 {
        match self {
            Self::Mainnet => 1,
            Self::Fuji => 5,
            Self::Local => 1337,
        }
    }

    /// Display name; also the key under which sidecars record deployments.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Fuji => "Fuji",
            Self::Local => "Local Network",
        }
    }

    /// Default public RPC endpoint, if the network has one.
    pub fn public_endpoint(&self) -> Option<&'static str> {
        match self {
            Self::Mainnet => Some("https://api.avax.network"),
            Self::Fuji => Some("https://api.avax-test.network"),
            Self::Local => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "fuji" | "testnet" | "fuji testnet" => Ok(Self::Fuji),
            "local" | "local network" => Ok(Self::Local),
            _ => Err(TypesError::UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("Fuji".parse::<Network>().unwrap(), Network::Fuji);
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::Fuji);
        assert_eq!("MAINNET".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("Local Network".parse::<Network>().unwrap(), Network::Local);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "devnet".parse::<Network>(),
            Err(TypesError::UnknownNetwork("devnet".to_string()))
        );
    }

    #[test]
    fn only_public_networks_have_endpoints() {
        for network in Network::PUBLIC {
            assert!(network.public_endpoint().is_some());
        }
        assert_eq!(Network::Local.public_endpoint(), None);
    }
}
