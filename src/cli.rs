//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// pylaunch - console launcher for Python desktop applications
///
/// Checks the interpreter, installs missing dependencies and starts the application.
#[derive(Parser, Debug)]
#[command(
    name = "pylaunch",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Console launcher for Python desktop applications",
    long_about = "pylaunch prepares the runtime environment of a Python desktop application \
                  (interpreter check, dependency install) and starts it on the current console. \
                  Running it without a subcommand launches the application.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  pylaunch\n    \
                  pylaunch --root C:\\Apps\\GymTracker\n    \
                  pylaunch run --propagate-exit-code\n    \
                  pylaunch check --json\n    \
                  pylaunch clean --dry-run"
)]
pub struct Cli {
    /// Application root directory (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "PYLAUNCH_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to pylaunch.yaml in the root)
    #[arg(long, short = 'c', global = true, env = "PYLAUNCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the environment and launch the application (default)
    Run(RunArgs),

    /// Diagnose the environment without launching
    Check(CheckArgs),

    /// Remove stale database files left behind by test runs
    Clean(CleanArgs),

    /// Print the effective configuration
    Config,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Launch with defaults:\n    pylaunch run\n\n\
                  Fail when the dependency install fails:\n    pylaunch run --strict-install\n\n\
                  Use from scripts:\n    pylaunch run --propagate-exit-code --no-pause")]
pub struct RunArgs {
    /// Abort when installing dependencies fails
    #[arg(long)]
    pub strict_install: bool,

    /// Exit with the application's exit code
    #[arg(long)]
    pub propagate_exit_code: bool,

    /// Do not wait for a key press after a failure
    #[arg(long)]
    pub no_pause: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the clean command
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// List files that would be removed without removing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pylaunch completions --shell bash > ~/.bash_completion.d/pylaunch\n\n\
                  Generate PowerShell completions:\n    pylaunch completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, short = 's')]
    pub shell: String,
}
