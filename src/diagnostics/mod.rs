//! Environment diagnostics for `pylaunch check`
//!
//! Runs the same probes as a launch, plus a version requirement check and a
//! file layout check, without starting the application.

pub mod version;

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::config::LauncherConfig;
use crate::error::Result;
use crate::launcher::invocations;
use crate::process::CommandRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: CheckStatus,
    pub detail: String,
}

impl CheckItem {
    fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Pass,
            detail: detail.into(),
        }
    }

    fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Fail,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub root: String,
    pub items: Vec<CheckItem>,
}

impl CheckReport {
    pub fn failures(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.status == CheckStatus::Fail)
            .count()
    }
}

/// Run every check against `root`
pub fn run_checks(
    config: &LauncherConfig,
    root: &Path,
    runner: &mut dyn CommandRunner,
) -> Result<CheckReport> {
    let mut items = Vec::new();

    let interpreter_ok = check_interpreter(config, root, runner, &mut items)?;
    check_files(config, root, &mut items);

    if interpreter_ok {
        let outcome = runner.run(&invocations::package_probe(config, root))?;
        items.push(if outcome.success() {
            CheckItem::pass(&config.probe_package, "installed")
        } else {
            CheckItem::fail(
                &config.probe_package,
                format!(
                    "not installed; run '{}'",
                    invocations::install_manifest(config, root).command_line()
                ),
            )
        });
    }

    debug!(items = items.len(), "checks complete");
    Ok(CheckReport {
        root: root.display().to_string(),
        items,
    })
}

fn check_interpreter(
    config: &LauncherConfig,
    root: &Path,
    runner: &mut dyn CommandRunner,
    items: &mut Vec<CheckItem>,
) -> Result<bool> {
    let outcome = runner.run(&invocations::version_probe(config, root))?;
    if !outcome.success() {
        items.push(CheckItem::fail(
            &config.interpreter,
            format!("not found; download it from {}", config.download_url),
        ));
        return Ok(false);
    }

    let requirement = config.version_requirement()?;
    match version::parse_interpreter_version(&outcome.output) {
        Some(found) if requirement.matches(&found) => {
            items.push(CheckItem::pass(
                &config.interpreter,
                format!("{found} satisfies {requirement}"),
            ));
        }
        Some(found) => {
            items.push(CheckItem::fail(
                &config.interpreter,
                format!("{found} does not satisfy {requirement}"),
            ));
        }
        None => {
            items.push(CheckItem::fail(
                &config.interpreter,
                format!("could not read a version from '{}'", outcome.output.trim()),
            ));
        }
    }
    Ok(true)
}

fn check_files(config: &LauncherConfig, root: &Path, items: &mut Vec<CheckItem>) {
    let mut files: Vec<&Path> = config.required_files.iter().map(|p| p.as_path()).collect();
    for extra in [config.entry_point.as_path(), config.manifest.as_path()] {
        if !files.contains(&extra) {
            files.push(extra);
        }
    }

    for file in files {
        let name = file.display().to_string();
        if root.join(file).is_file() {
            items.push(CheckItem::pass(name, "present"));
        } else {
            items.push(CheckItem::fail(name, "missing"));
        }
    }
}
