//! Fusion configuration.
//!
//! Loaded from TOML. Every field has a default, so a missing file or a
//! partial file is fine:
//!
//! ```toml
//! [dashboard]
//! seed = 7
//! seed_thread = true
//! seed_pulses = true
//!
//! [workflow]
//! step_delay_ms = 800
//!
//! [pulse]
//! tick_interval_secs = 12
//! capacity = 6
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FusionError, Result};
use crate::pulse::FEED_CAPACITY;

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "fusion";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FusionConfig {
    pub dashboard: DashboardSettings,
    pub workflow: WorkflowSettings,
    pub pulse: PulseSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardSettings {
    /// Fixed RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Start with the canned welcome thread
    pub seed_thread: bool,
    /// Start with the canned pulses
    pub seed_pulses: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            seed: None,
            seed_thread: true,
            seed_pulses: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WorkflowSettings {
    pub step_delay_ms: u64,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self { step_delay_ms: 800 }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PulseSettings {
    pub tick_interval_secs: u64,
    pub capacity: usize,
}

impl Default for PulseSettings {
    fn default() -> Self {
        Self {
            tick_interval_secs: 12,
            capacity: FEED_CAPACITY,
        }
    }
}

impl FusionConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FusionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config from `path`, or from [`default_config_path`] when
    /// `path` is `None`. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) => path,
                None => {
                    tracing::debug!("[Config] No platform config dir, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            tracing::debug!("[Config] {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("[Config] Loaded {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.workflow.step_delay_ms == 0 {
            return Err(FusionError::config("workflow.step_delay_ms must be positive"));
        }
        if self.pulse.tick_interval_secs == 0 {
            return Err(FusionError::config(
                "pulse.tick_interval_secs must be positive",
            ));
        }
        if self.pulse.capacity != FEED_CAPACITY {
            return Err(FusionError::config(format!(
                "pulse.capacity is fixed at {FEED_CAPACITY}, got {}",
                self.pulse.capacity
            )));
        }
        Ok(())
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.workflow.step_delay_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.pulse.tick_interval_secs)
    }
}

/// `<platform config dir>/fusion/config.toml`, e.g. `~/.config/fusion/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
