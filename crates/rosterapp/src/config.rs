//! # Configuration
//!
//! Roster configuration is managed by [`clapfig`], which handles layered loading from a
//! TOML file, environment variables and compiled defaults.
//!
//! ## Configuration Sources (in order of precedence)
//!
//! 1. **Environment variables**: `ROSTER__BASE_URL`, `ROSTER__TIMEOUT_SECS`
//! 2. **Config file**: `roster.toml`, looked up in `$ROSTER_CONFIG_DIR` when set and in the
//!    OS-appropriate config directory otherwise (via the `directories` crate)
//! 3. **Defaults**: Compiled into the binary
//!
//! A malformed file falls back to the defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `base_url` | the public mock collection | Users REST collection to talk to |
//! | `timeout_secs` | `30` | Per-request timeout |
//!
//! The CLI's `--base-url` flag overrides `base_url` for a single run.

use confique::Config;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://68ed6c2adf2025af780028aa.mockapi.io/mockapi/users";
pub const CONFIG_FILE_NAME: &str = "roster.toml";

/// Configuration for roster, stored in `roster.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Base URL of the users REST collection
    #[config(default = "https://68ed6c2adf2025af780028aa.mockapi.io/mockapi/users")]
    pub base_url: String,

    /// Per-request timeout, in seconds
    #[config(default = 30)]
    pub timeout_secs: u64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl RosterConfig {
    /// Request timeout; a zero setting is raised to one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
