//! Configuration discovery
//!
//! Lookup order:
//! 1. an explicit `--config` file (must exist)
//! 2. `pylaunch.yaml` in the application root
//! 3. `pylaunch/pylaunch.yaml` in the user config directory
//! 4. built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{CONFIG_FILE_NAME, LauncherConfig};
use crate::error::{LauncherError, Result, config as config_error};

/// Load a configuration file
pub fn load_file(path: &Path) -> Result<LauncherConfig> {
    if !path.exists() {
        return Err(config_error::not_found(path));
    }

    let content = fs::read_to_string(path).map_err(|e| config_error::read_failed(path, &e))?;

    let config = LauncherConfig::from_yaml(&content).map_err(|e| match e {
        LauncherError::ConfigParseFailed { reason, .. } => {
            config_error::parse_failed(path, reason)
        }
        other => other,
    })?;

    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Where the effective configuration comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` / `PYLAUNCH_CONFIG`
    Explicit(PathBuf),
    /// `pylaunch.yaml` in the directory searched as the application root
    Local { path: PathBuf, root: PathBuf },
    /// The per-user configuration file
    Global(PathBuf),
    Defaults,
}

impl ConfigSource {
    /// Configuration file, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Global(path) | Self::Local { path, .. } => {
                Some(path.as_path())
            }
            Self::Defaults => None,
        }
    }
}

/// Find the configuration file without loading it
pub fn locate(root: Option<&Path>, explicit: Option<&Path>) -> Result<ConfigSource> {
    if let Some(path) = explicit {
        return Ok(ConfigSource::Explicit(path.to_path_buf()));
    }

    let search_root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let local = search_root.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(ConfigSource::Local {
            path: local,
            root: search_root,
        });
    }

    Ok(global_config_path()
        .filter(|p| p.is_file())
        .map_or(ConfigSource::Defaults, ConfigSource::Global))
}

/// Discover and load the effective configuration
///
/// `root` is the root given on the command line, if any. A root-local config
/// that does not set `root` itself is anchored to the directory it was found in.
pub fn discover(root: Option<&Path>, explicit: Option<&Path>) -> Result<LauncherConfig> {
    let mut config = match locate(root, explicit)? {
        ConfigSource::Explicit(path) | ConfigSource::Global(path) => load_file(&path)?,
        ConfigSource::Local { path, root } => {
            let mut config = load_file(&path)?;
            if config.root.is_none() {
                config.root = Some(root);
            }
            config
        }
        ConfigSource::Defaults => {
            debug!("no configuration file found, using defaults");
            LauncherConfig::default()
        }
    };

    if let Some(root) = root {
        config.root = Some(root.to_path_buf());
    }

    Ok(config)
}

/// `<config dir>/pylaunch/pylaunch.yaml`
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pylaunch").join(CONFIG_FILE_NAME))
}
