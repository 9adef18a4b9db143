//! pylaunch - console launcher for Python desktop applications
//!
//! Sets up the terminal, verifies the interpreter, installs missing
//! dependencies and runs the application entry point, reporting the outcome
//! to the person at the console.

use clap::Parser;
use miette::Diagnostic;

mod cleanup;
mod cli;
mod commands;
mod config;
mod diagnostics;
mod error;
mod launcher;
mod logging;
mod process;
mod progress;
#[cfg(test)]
mod test_fixtures;
mod ui;

use cli::{Cli, Commands, RunArgs};
use commands::helpers::GlobalOptions;
use error::LauncherError;

fn report_error(err: &LauncherError) {
    eprintln!("Error: {err}");
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = GlobalOptions {
        root: cli.root,
        config: cli.config,
    };

    let result = match cli.command {
        None => commands::run::run(&options, &RunArgs::default()),
        Some(Commands::Run(args)) => commands::run::run(&options, &args),
        Some(Commands::Check(args)) => commands::check::run(&options, &args).map(|()| 0),
        Some(Commands::Clean(args)) => commands::clean::run(&options, &args).map(|()| 0),
        Some(Commands::Config) => commands::show_config::run(&options).map(|()| 0),
        Some(Commands::Version) => commands::version::run(&options).map(|()| 0),
        Some(Commands::Completions(args)) => commands::completions::run(&args).map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    }
}
