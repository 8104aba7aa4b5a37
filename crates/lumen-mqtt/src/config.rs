//! Broker configuration
//!
//! Loaded from `~/.config/lumen/config.toml` with serde defaults for every
//! field, so a missing file or a partial file both work. CLI flags override
//! the file afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use lumen_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "lumen";

/// Connection parameters for the MQTT broker.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BrokerConfig {
    /// Broker hostname or IP.
    pub host: String,

    /// Broker TCP port.
    pub port: u16,

    /// Optional username credential.
    pub username: Option<String>,

    /// Optional password credential.
    pub password: Option<String>,

    /// MQTT keep-alive interval, in seconds.
    pub keep_alive_secs: u64,

    /// Start each session with a clean broker-side state.
    pub clean_session: bool,

    /// Topic commands are published to.
    pub control_topic: String,

    /// Topic the device reports errors and status on.
    pub message_topic: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 1883,
            username: None,
            password: None,
            keep_alive_secs: 60,
            clean_session: true,
            control_topic: "rgb/control".to_string(),
            message_topic: "rgb/error".to_string(),
        }
    }
}

/// Generate the per-session client identifier.
///
/// Randomized so multiple panels can coexist on one broker without
/// clean-session takeovers kicking each other off.
pub fn random_client_id() -> String {
    format!("lumen_{:08x}", rand::random::<u32>())
}

/// Load the broker configuration.
///
/// With an explicit `path` the file must exist and parse -- a typo'd
/// `--config` should fail loudly. Without one, the default location is
/// tried and a missing file falls back to defaults; a present-but-broken
/// file is still an error.
pub fn load_config(path: Option<&Path>) -> Result<BrokerConfig> {
    match path {
        Some(path) => read_config(path),
        None => {
            let path = default_config_path();
            if path.exists() {
                read_config(&path)
            } else {
                Ok(BrokerConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<BrokerConfig> {
    let raw = std::fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|e| Error::config_invalid(path, e.to_string()))
}

fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}
