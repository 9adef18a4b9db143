//! Command helper utilities

use std::path::PathBuf;

use crate::config::{LauncherConfig, loader};
use crate::error::Result;

/// Global options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Load the effective configuration for the global options
pub fn load_config(options: &GlobalOptions) -> Result<LauncherConfig> {
    loader::discover(options.root.as_deref(), options.config.as_deref())
}
