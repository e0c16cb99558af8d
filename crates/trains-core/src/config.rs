//! Configuration for trains
//!
//! Configuration is looked up in order: an explicit `--config` path, a
//! `trains.toml` in the working directory, then the user config directory
//! (`~/.config/trains/config.toml`, overridable with `TRAINS_CONFIG_DIR`).
//! With none present the built-in defaults apply.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TrainsError};

pub use types::{ReportConfig, TrainsConfig};

/// Project-local config file name
pub const CONFIG_FILE: &str = "trains.toml";

const GLOBAL_CONFIG_DIR: &str = "trains";
const GLOBAL_CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "TRAINS_CONFIG_DIR";

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path)
            | ConfigSource::Local(path)
            | ConfigSource::Global(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }
}

impl TrainsConfig {
    /// Load configuration from a file.
    ///
    /// A relative `routes_file` is rebased onto the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| TrainsError::io_operation("read config", path.display(), e))?;
        let mut config: TrainsConfig = toml::from_str(&content)?;

        if let (Some(routes_file), Some(dir)) = (&config.routes_file, path.parent()) {
            if routes_file.is_relative() {
                config.routes_file = Some(dir.join(routes_file));
            }
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrainsError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| TrainsError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Resolve the active configuration.
    ///
    /// An explicit path must exist; the other locations are optional.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(TrainsError::not_found("config file", path.display()));
            }
            let source = ConfigSource::Explicit(path.to_path_buf());
            debug!(source = ?source, "config_discovered");
            return Ok((Self::load(path)?, source));
        }

        let local = cwd.join(CONFIG_FILE);
        if local.is_file() {
            debug!(path = %local.display(), "config_discovered");
            return Ok((Self::load(&local)?, ConfigSource::Local(local)));
        }

        if let Some(global) = global_config_path() {
            if global.is_file() {
                debug!(path = %global.display(), "config_discovered");
                return Ok((Self::load(&global)?, ConfigSource::Global(global)));
            }
        }

        debug!("config_defaults");
        Ok((Self::default(), ConfigSource::Defaults))
    }
}

/// Path of the user-level config file, if a config directory is known
pub fn global_config_path() -> Option<PathBuf> {
    let dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()?.join(GLOBAL_CONFIG_DIR),
    };
    Some(dir.join(GLOBAL_CONFIG_FILE))
}
