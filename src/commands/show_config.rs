//! Config command: print the effective configuration

use crate::commands::helpers::{GlobalOptions, load_config};
use crate::error::Result;

/// Print the configuration as YAML, with the root resolved when possible
pub fn run(options: &GlobalOptions) -> Result<()> {
    let mut config = load_config(options)?;
    if let Ok(root) = config.resolve_root() {
        config.root = Some(root);
    }
    print!("{}", config.to_yaml()?);
    Ok(())
}
