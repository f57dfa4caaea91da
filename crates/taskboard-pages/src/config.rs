//! Harness configuration.
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. `taskboard.toml` in the working directory, or an explicit path
//! 3. `TASKBOARD_*` environment variables, `__` separating nested keys
//!    (`TASKBOARD_WAIT__TIMEOUT_MS=2000`, `TASKBOARD_LAYOUT__CARD=article`)
//!
//! Credentials are deliberately not part of this; see
//! [`Credentials::from_env`](crate::Credentials::from_env).

use crate::board::{BoardLayout, SnapshotEngine};
use crate::error::Result;
use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use taskboard_browser::WaitConfig;
use tracing::debug;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "taskboard.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Wait bounds, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitSettings {
    /// Ceiling for a single wait, e.g. one card title becoming visible.
    pub timeout_ms: u64,
    /// Poll interval while waiting.
    pub poll_interval_ms: u64,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            poll_interval_ms: 100,
        }
    }
}

/// Everything the harness needs besides credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Base URL of the board application.
    pub base_url: String,
    /// Run Chrome without a window.
    pub headless: bool,
    /// Wait bounds for page and card reads.
    pub wait: WaitSettings,
    /// Selectors for columns and cards.
    pub layout: BoardLayout,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5173".to_string(),
            headless: true,
            wait: WaitSettings::default(),
            layout: BoardLayout::default(),
        }
    }
}

impl HarnessConfig {
    /// Loads configuration from defaults, the config file and the environment.
    ///
    /// With `path = None`, `taskboard.toml` is used if it exists.
    ///
    /// # Errors
    ///
    /// Returns `Config` if a source cannot be parsed or has the wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path).extract().map_err(Into::into)
    }

    /// The layered provider behind [`HarnessConfig::load`].
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = path.map(Path::to_path_buf).or_else(|| {
            let default_path = Path::new(CONFIG_FILE);
            default_path.exists().then(|| default_path.to_path_buf())
        });

        if let Some(path) = config_file {
            debug!(path = %path.display(), "reading config file");
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Wait bounds as a [`WaitConfig`].
    #[must_use]
    pub fn wait_config(&self) -> WaitConfig {
        WaitConfig::from_millis(self.wait.timeout_ms, self.wait.poll_interval_ms)
    }

    /// A snapshot engine using this layout and wait bounds.
    #[must_use]
    pub fn engine(&self) -> SnapshotEngine {
        SnapshotEngine::new(self.layout.clone(), self.wait_config())
    }
}
