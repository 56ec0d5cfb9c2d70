//! Mempool configuration.
//!
//! [`MempoolConfig`] is the TOML-facing form, loaded once at startup.
//! [`ValidationConfig`] is the immutable runtime value the checks read: the
//! chain parameters plus handles to the external collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use sidechain_types::{AssetId, ChainParams, ProgramHash};
use sidechain_utils::{init_logging, LogFormat};

use crate::error::ConfigError;
use crate::host::{ProgramHashSource, ProgramRunner, SpvVerifier, StandardProgramRunner};

/// How the 30% foundation share of a coinbase is enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardRule {
    /// `foundation * 10 >= total * 3`, computed in integers.
    #[default]
    Exact,
    /// `foundation >= trunc(total as f64 * 0.3)`, for networks that already
    /// accepted blocks under the floating-point rule.
    LegacyFloat,
}

/// Mempool validation settings as read from TOML.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MempoolConfig {
    /// Hex-encoded id of the only asset outputs may carry.
    #[serde(default = "default_system_asset_id")]
    pub system_asset_id: String,

    /// Hex-encoded program hash receiving the foundation share of rewards.
    #[serde(default = "default_foundation")]
    pub foundation: String,

    /// Maximum serialized transaction size in bytes.
    #[serde(default = "default_max_tx_size")]
    pub max_tx_size: usize,

    /// Nodes joining the existing network need `legacy_float` for bit-for-bit admission parity.
    #[serde(default)]
    pub reward_rule: RewardRule,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_system_asset_id() -> String {
    ChainParams::default().system_asset_id.to_string()
}

fn default_foundation() -> String {
    ChainParams::default().foundation.to_string()
}

fn default_max_tx_size() -> usize {
    ChainParams::default().max_tx_size
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl MempoolConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("MempoolConfig is always serializable to TOML")
    }

    /// Resolve the hex-encoded fields into chain parameters.
    pub fn chain_params(&self) -> Result<ChainParams, ConfigError> {
        let system_asset_id =
            AssetId::from_hex(&self.system_asset_id).map_err(|e| ConfigError::InvalidField {
                field: "system_asset_id",
                reason: e.to_string(),
            })?;
        let foundation =
            ProgramHash::from_hex(&self.foundation).map_err(|e| ConfigError::InvalidField {
                field: "foundation",
                reason: e.to_string(),
            })?;
        if self.max_tx_size == 0 {
            return Err(ConfigError::InvalidField {
                field: "max_tx_size",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(ChainParams {
            system_asset_id,
            foundation,
            max_tx_size: self.max_tx_size,
            ..ChainParams::default()
        })
    }

    /// Install the global tracing subscriber described by this config.
    ///
    /// Returns `false` if one was already installed.
    pub fn init_logging(&self) -> bool {
        init_logging(self.log_format, &self.log_level)
    }
}

impl Default for MempoolConfig {
    fn default() -> Self {
        Self {
            system_asset_id: default_system_asset_id(),
            foundation: default_foundation(),
            max_tx_size: default_max_tx_size(),
            reward_rule: RewardRule::default(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

/// Everything the registered checks read. Built once, shared through `Arc`,
/// never mutated.
#[derive(Clone)]
pub struct ValidationConfig {
    pub params: ChainParams,
    pub reward_rule: RewardRule,
    pub spv: Arc<dyn SpvVerifier>,
    pub program_hashes: Arc<dyn ProgramHashSource>,
    pub program_runner: Arc<dyn ProgramRunner>,
}

impl ValidationConfig {
    /// Config using the built-in [`StandardProgramRunner`] and the exact reward rule.
    pub fn new(
        params: ChainParams,
        spv: Arc<dyn SpvVerifier>,
        program_hashes: Arc<dyn ProgramHashSource>,
    ) -> Self {
        Self {
            params,
            reward_rule: RewardRule::default(),
            spv,
            program_hashes,
            program_runner: Arc::new(StandardProgramRunner),
        }
    }

    pub fn from_mempool_config(
        config: &MempoolConfig,
        spv: Arc<dyn SpvVerifier>,
        program_hashes: Arc<dyn ProgramHashSource>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(config.chain_params()?, spv, program_hashes)
            .with_reward_rule(config.reward_rule))
    }

    pub fn with_reward_rule(mut self, rule: RewardRule) -> Self {
        self.reward_rule = rule;
        self
    }

    pub fn with_program_runner(mut self, runner: Arc<dyn ProgramRunner>) -> Self {
        self.program_runner = runner;
        self
    }
}

impl fmt::Debug for ValidationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationConfig")
            .field("params", &self.params)
            .field("reward_rule", &self.reward_rule)
            .finish_non_exhaustive()
    }
}
