//! Run command: the launch pipeline on the real terminal

use tracing::debug;

use crate::cli::RunArgs;
use crate::commands::helpers::{GlobalOptions, load_config};
use crate::config::LauncherConfig;
use crate::error::Result;
use crate::launcher::Launcher;
use crate::process::SystemRunner;
use crate::ui::TerminalConsole;

/// Run the launcher and return the process exit code
pub fn run(options: &GlobalOptions, args: &RunArgs) -> Result<i32> {
    let mut config = load_config(options)?;
    apply_args(&mut config, args);

    let mut runner = SystemRunner;
    let mut console = TerminalConsole::new();
    let mut launcher = Launcher::new(&config, &mut runner, &mut console)?;
    debug!(root = %launcher.root().display(), "application root");

    let report = launcher.run()?;
    debug!(
        interpreter = %report.interpreter_version,
        install = ?report.install,
        app_exit = ?report.app_exit.code,
        exit_code = report.exit_code,
        "launch finished"
    );
    Ok(report.exit_code)
}

/// Command line flags only ever switch behavior on
fn apply_args(config: &mut LauncherConfig, args: &RunArgs) {
    config.strict_install |= args.strict_install;
    config.propagate_exit_code |= args.propagate_exit_code;
    if args.no_pause {
        config.pause_on_failure = false;
    }
}
