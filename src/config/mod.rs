//! Launcher configuration (pylaunch.yaml)
//!
//! Every value the launcher needs (application root, interpreter, probe
//! package, manifest, entry point, log directory, timings) lives here and is
//! passed explicitly into the launcher instead of being read from ambient
//! shell state.

pub mod loader;


use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{
    Result, config as config_error, encode as encode_error, launch as launch_error,
};

/// File name looked up in the application root and the user config directory
pub const CONFIG_FILE_NAME: &str = "pylaunch.yaml";

/// Launcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Terminal window title
    pub title: String,

    /// Application root; the current directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Interpreter program resolved through PATH
    pub interpreter: String,

    /// Arguments for the interpreter version query
    pub version_args: Vec<String>,

    /// Interpreter version requirement checked by `pylaunch check`
    pub python_requires: String,

    /// Where users are sent when the interpreter is missing
    pub download_url: String,

    /// Package whose presence decides whether the manifest gets installed
    pub probe_package: String,

    /// Dependency manifest, relative to the root
    pub manifest: PathBuf,

    /// Application entry point, relative to the root
    pub entry_point: PathBuf,

    /// Log directory the application writes to, relative to the root
    pub log_dir: PathBuf,

    /// Seconds to wait after a successful run before exiting
    pub success_delay_secs: u64,

    /// Wait for a key press after a failed run
    pub pause_on_failure: bool,

    /// Treat a failed dependency install as fatal
    pub strict_install: bool,

    /// Exit with the application's exit code instead of 0
    pub propagate_exit_code: bool,

    /// Files that must exist under the root for `pylaunch check` to pass
    pub required_files: Vec<PathBuf>,

    /// Main database file inspected by `pylaunch clean`
    pub database: PathBuf,

    /// Glob patterns of stale files removed by `pylaunch clean`
    pub stale_patterns: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            title: "GymTracker".to_string(),
            root: None,
            interpreter: "python".to_string(),
            version_args: vec!["--version".to_string()],
            python_requires: ">=3.8".to_string(),
            download_url: "https://www.python.org/downloads/".to_string(),
            probe_package: "PySide6".to_string(),
            manifest: PathBuf::from("requirements.txt"),
            entry_point: PathBuf::from("main.py"),
            log_dir: PathBuf::from("logs"),
            success_delay_secs: 3,
            pause_on_failure: true,
            strict_install: false,
            propagate_exit_code: false,
            required_files: vec![PathBuf::from("main.py"), PathBuf::from("requirements.txt")],
            database: PathBuf::from("gym_tracker.db"),
            stale_patterns: vec![
                "test_*.db".to_string(),
                "test_*.db-wal".to_string(),
                "test_*.db-shm".to_string(),
                "*.db-journal".to_string(),
            ],
        }
    }
}

impl LauncherConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| encode_error::output_encode_failed("YAML", e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("interpreter", self.interpreter.as_str()),
            ("probe_package", self.probe_package.as_str()),
            ("download_url", self.download_url.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(config_error::empty_field(field));
            }
        }

        if self.entry_point.as_os_str().is_empty() {
            return Err(config_error::empty_field("entry_point"));
        }
        if self.manifest.as_os_str().is_empty() {
            return Err(config_error::empty_field("manifest"));
        }

        self.version_requirement()?;
        Ok(())
    }

    /// Parsed `python_requires`
    pub fn version_requirement(&self) -> Result<semver::VersionReq> {
        semver::VersionReq::parse(&self.python_requires)
            .map_err(|e| config_error::bad_requirement(&self.python_requires, e))
    }

    /// Delay after a successful run
    pub fn success_delay(&self) -> Duration {
        Duration::from_secs(self.success_delay_secs)
    }

    /// Resolve the application root to an absolute, existing directory
    pub fn resolve_root(&self) -> Result<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };

        if !root.is_dir() {
            return Err(launch_error::root_not_found(root.display().to_string()));
        }

        dunce::canonicalize(&root)
            .map_err(|_| launch_error::root_not_found(root.display().to_string()))
    }

    /// Manifest path under `root`
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }

    /// Log directory under `root`
    pub fn log_dir_path(&self, root: &Path) -> PathBuf {
        root.join(&self.log_dir)
    }

    /// Database path under `root`
    pub fn database_path(&self, root: &Path) -> PathBuf {
        root.join(&self.database)
    }
}
