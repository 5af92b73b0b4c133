//! Run configuration.
//!
//! Deserialized from TOML at the CLI edge or from a Python dict through the
//! bindings. Every field has a default so an empty config is valid.

use crate::core::sequencer::SETTLE_TICKS;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub cluster: ClusterConfig,
    pub soc: SocConfig,
}

impl Config {
    /// Builds a config from an untyped JSON tree. The Python bindings hand
    /// configs over as plain dicts lowered to this form.
    pub fn from_value(value: serde_json::Value) -> Result<Self, String> {
        serde_json::from_value(value).map_err(|e| format!("invalid config: {}", e))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Core variant to instantiate.
    pub variant: String,
    /// Emit a per-tick sequencer trace on stderr.
    pub trace_sequencer: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            variant: "standard".to_string(),
            trace_sequencer: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Ticks the cluster reset/power lines are held asserted after reset.
    pub settle_ticks: u32,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            settle_ticks: SETTLE_TICKS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SocConfig {
    /// Reset vector assigned by the enclosing SoC, if any.
    pub reset_address: Option<u64>,
}
