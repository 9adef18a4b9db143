//! Version command implementation

use crate::commands::helpers::{GlobalOptions, load_config};
use crate::config::loader;
use crate::error::Result;

/// Run version command
///
/// Besides the build, shows which configuration file and interpreter a launch
/// from here would use. A broken configuration is reported, not fatal.
pub fn run(options: &GlobalOptions) -> Result<()> {
    println!("pylaunch {}", env!("CARGO_PKG_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Target OS: {}", std::env::consts::OS);
    println!();

    let source = loader::locate(options.root.as_deref(), options.config.as_deref())?;
    match source.path() {
        Some(path) => println!("Configuration: {}", path.display()),
        None => println!("Configuration: built-in defaults"),
    }

    match load_config(options) {
        Ok(config) => {
            println!("  Interpreter: {}", config.interpreter);
            println!("  Requires: {}", config.python_requires);
            println!("  Entry point: {}", config.entry_point.display());
        }
        Err(err) => println!("  Not usable: {err}"),
    }

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
