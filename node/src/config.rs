//! Node configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use keel_governance::StabilityParams;
use keel_types::{AccountId, INITIAL_SUPPLY, TARGET_PRICE};

use crate::error::NodeError;

/// Configuration for a KEEL node.
///
/// Can be loaded from a TOML file via [`NodeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// The administrator account; doubles as the contraction reserve.
    pub administrator: AccountId,

    /// Raw units credited to the administrator at genesis.
    #[serde(default = "default_initial_supply")]
    pub initial_supply: u128,

    /// Fixed price target in micro-units.
    #[serde(default = "default_target_price")]
    pub target_price: u64,

    /// Stability parameters; governable after startup.
    #[serde(default)]
    pub params: StabilityParams,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl NodeConfig {
    /// A config with protocol defaults for everything but the administrator.
    pub fn with_administrator(administrator: AccountId) -> Self {
        Self {
            administrator,
            initial_supply: default_initial_supply(),
            target_price: default_target_price(),
            params: StabilityParams::default(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, NodeError> {
        toml::from_str(raw).map_err(|e| NodeError::Config(e.to_string()))
    }

    /// Load from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, NodeError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

fn default_initial_supply() -> u128 {
    INITIAL_SUPPLY
}

fn default_target_price() -> u64 {
    TARGET_PRICE
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
