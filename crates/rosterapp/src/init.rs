//! # Context Setup
//!
//! [`initialize`] turns configuration into a ready-to-use [`RosterApi`] over HTTP.
//!
//! ## Config Directory Resolution
//!
//! 1. `$ROSTER_CONFIG_DIR`, when set (primarily for testing).
//! 2. The OS-appropriate config directory (via the `directories` crate).
//! 3. Neither available → compiled defaults only.
//!
//! A base URL passed in explicitly (the CLI's `--base-url`) wins over whatever the file says.

use crate::api::RosterApi;
use crate::backend::http::HttpBackend;
use crate::config::{RosterConfig, CONFIG_FILE_NAME};
use crate::error::Result;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct RosterContext {
    pub api: RosterApi<HttpBackend>,
    pub config: RosterConfig,
}

pub fn config_dir() -> Option<PathBuf> {
    std::env::var("ROSTER_CONFIG_DIR")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("com", "roster", "roster").map(|dirs| dirs.config_dir().to_path_buf())
        })
}

/// Loads `roster.toml` from `dir`, falling back to defaults on any failure.
pub fn load_config(dir: Option<&Path>) -> RosterConfig {
    let search_paths = dir
        .map(|dir| vec![SearchPath::Path(dir.to_path_buf())])
        .unwrap_or_default();

    Clapfig::builder()
        .app_name("roster")
        .file_name(CONFIG_FILE_NAME)
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

pub fn initialize(base_url_override: Option<String>) -> Result<RosterContext> {
    let dir = config_dir();
    let mut config = load_config(dir.as_deref());
    if let Some(base_url) = base_url_override {
        config.base_url = base_url;
    }
    debug!(base_url = %config.base_url, config_dir = ?dir, "initializing");

    let backend = HttpBackend::with_timeout(&config.base_url, config.timeout())?;
    Ok(RosterContext {
        api: RosterApi::new(backend),
        config,
    })
}
