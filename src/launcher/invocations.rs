//! Commands issued against the interpreter

use std::path::Path;

use crate::config::LauncherConfig;
use crate::process::Invocation;

/// `<interpreter> --version`, captured
pub fn version_probe(config: &LauncherConfig, root: &Path) -> Invocation {
    Invocation::new(&config.interpreter, root)
        .args(config.version_args.iter().cloned())
        .quiet()
}

/// `<interpreter> -m pip show <probe_package>`, captured
pub fn package_probe(config: &LauncherConfig, root: &Path) -> Invocation {
    Invocation::new(&config.interpreter, root)
        .args(["-m", "pip", "show"])
        .arg(&config.probe_package)
        .quiet()
}

/// `<interpreter> -m pip install -r <manifest>`, on the console
pub fn install_manifest(config: &LauncherConfig, root: &Path) -> Invocation {
    Invocation::new(&config.interpreter, root)
        .args(["-m", "pip", "install", "-r"])
        .arg(config.manifest.to_string_lossy())
}

/// `<interpreter> <entry_point>`, on the console
pub fn application(config: &LauncherConfig, root: &Path) -> Invocation {
    Invocation::new(&config.interpreter, root).arg(config.entry_point.to_string_lossy())
}
