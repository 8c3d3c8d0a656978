//! Per-network configuration: full-node endpoint and package id.
//!
//! Mirrors the app's network map: each supported network pairs the public
//! full-node URL with the crowdfunding package published there. The
//! package id is optional at configuration time; its absence only becomes
//! an error when a transaction is actually built.

use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::core::address::{AddressError, SuiAddress};
use super::rpc_url::{RpcUrl, RpcUrlError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown network: {0:?} (expected devnet, testnet, or mainnet)")]
    UnknownNetwork(String),

    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(#[from] RpcUrlError),

    #[error("Invalid crowdfunding package id: {0}")]
    InvalidPackageId(#[from] AddressError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Devnet,
    Testnet,
    Mainnet,
}

impl Network {
    /// Public full-node JSON-RPC endpoint for this network.
    pub fn fullnode_url(&self) -> &'static str {
        match self {
            Network::Devnet => "https://fullnode.devnet.sui.io:443",
            Network::Testnet => "https://fullnode.testnet.sui.io:443",
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Devnet => "devnet",
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
        }
    }

    /// Environment variable naming the package id on this network.
    fn package_id_var(&self) -> &'static str {
        match self {
            Network::Devnet => "DEVNET_CROWDFUNDING_PACKAGE_ID",
            Network::Testnet => "TESTNET_CROWDFUNDING_PACKAGE_ID",
            Network::Mainnet => "MAINNET_CROWDFUNDING_PACKAGE_ID",
        }
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "devnet" => Ok(Network::Devnet),
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            other => Err(ConfigError::UnknownNetwork(other.to_string())),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved client configuration for one network.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub network: Network,
    /// Endpoints to try in order.
    pub rpc_urls: Vec<RpcUrl>,
    /// Crowdfunding package published on this network, when configured.
    pub crowdfunding_package_id: Option<SuiAddress>,
}

impl NetworkConfig {
    /// Configuration pointing at the network's public full node.
    pub fn new(network: Network) -> Result<Self, ConfigError> {
        Ok(Self {
            network,
            rpc_urls: vec![RpcUrl::plain(network.fullnode_url())?],
            crowdfunding_package_id: None,
        })
    }

    pub fn with_rpc_urls(mut self, rpc_urls: Vec<RpcUrl>) -> Self {
        self.rpc_urls = rpc_urls;
        self
    }

    pub fn with_package_id(mut self, package_id: SuiAddress) -> Self {
        self.crowdfunding_package_id = Some(package_id);
        self
    }

    /// Builds the configuration from the environment.
    ///
    /// Recognized variables:
    /// - `SUI_NETWORK`: `devnet` | `testnet` | `mainnet` (default `testnet`)
    /// - `SUI_RPC_URL`: endpoint override; with `SUI_RPC_API_KEY` set it is
    ///   treated as a `{}` template for the key
    /// - `DEVNET_` / `TESTNET_` / `MAINNET_CROWDFUNDING_PACKAGE_ID`
    pub fn from_env() -> Result<Self, ConfigError> {
        let network = match env::var("SUI_NETWORK") {
            Ok(name) => name.parse()?,
            Err(_) => Network::Testnet,
        };

        let rpc_urls = match env::var("SUI_RPC_URL") {
            Ok(template) => match env::var("SUI_RPC_API_KEY") {
                Ok(key) => vec![RpcUrl::new(&template, &key)?],
                Err(_) => vec![RpcUrl::plain(&template)?],
            },
            Err(_) => vec![RpcUrl::plain(network.fullnode_url())?],
        };

        let crowdfunding_package_id = match env::var(network.package_id_var()) {
            Ok(id) => Some(SuiAddress::from_string(&id)?),
            Err(_) => None,
        };

        Ok(Self {
            network,
            rpc_urls,
            crowdfunding_package_id,
        })
    }
}
