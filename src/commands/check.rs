//! Check command implementation

use console::Style;

use crate::cli::CheckArgs;
use crate::commands::helpers::{GlobalOptions, load_config};
use crate::diagnostics::{self, CheckReport, CheckStatus};
use crate::error::{LauncherError, Result};
use crate::process::SystemRunner;

/// Run check command
pub fn run(options: &GlobalOptions, args: &CheckArgs) -> Result<()> {
    let config = load_config(options)?;
    let root = config.resolve_root()?;

    let report = diagnostics::run_checks(&config, &root, &mut SystemRunner)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    match report.failures() {
        0 => Ok(()),
        failed => Err(LauncherError::CheckFailed { failed }),
    }
}

fn print_report(report: &CheckReport) {
    let bold = Style::new().bold();
    let pass = Style::new().green();
    let fail = Style::new().red();

    println!("{} {}", bold.apply_to("Root:"), report.root);
    for item in &report.items {
        let mark = match item.status {
            CheckStatus::Pass => pass.apply_to("✓"),
            CheckStatus::Fail => fail.apply_to("✗"),
        };
        println!("  {mark} {}: {}", bold.apply_to(&item.name), item.detail);
    }
}
