//! Clean command implementation

use console::Style;

use crate::cleanup::{self, DatabaseState};
use crate::cli::CleanArgs;
use crate::commands::helpers::{GlobalOptions, load_config};
use crate::error::{Result, launch as launch_error};

/// Run clean command
pub fn run(options: &GlobalOptions, args: &CleanArgs) -> Result<()> {
    let config = load_config(options)?;
    let root = config.resolve_root()?;
    let dim = Style::new().dim();

    let stale = cleanup::find_stale_files(&root, &config.stale_patterns)?;
    if stale.is_empty() {
        println!("No stale files found");
    } else if args.dry_run {
        println!("Would remove {} file(s):", stale.len());
        for path in &stale {
            println!("  {}", dim.apply_to(path.display()));
        }
    } else {
        let report = cleanup::remove_files(stale);
        println!("Removed {} file(s)", report.removed.len());
        for path in &report.removed {
            println!("  {}", dim.apply_to(path.display()));
        }
        for err in &report.failed {
            println!("  {} {err}", Style::new().red().apply_to("locked:"));
        }
    }

    let database = config.database_path(&root);
    match cleanup::check_database(&database) {
        DatabaseState::Missing => {
            println!(
                "Database {} not created yet (created on first start)",
                config.database.display()
            );
            Ok(())
        }
        DatabaseState::Accessible { size } => {
            println!("Database {} is accessible ({size} bytes)", config.database.display());
            Ok(())
        }
        DatabaseState::Locked { reason } => Err(launch_error::database_inaccessible(
            database.display().to_string(),
            reason,
        )),
    }
}
