//! The launch pipeline
//!
//! A single linear sequence:
//! 1. set the terminal title
//! 2. enter the application root
//! 3. probe the interpreter (fatal when missing)
//! 4. probe the designated package, installing the manifest when missing
//! 5. run the entry point on the shared console
//! 6. report the outcome and pick the launcher's exit code
//!
//! Every step blocks until its command exits.

pub mod invocations;


use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result, launch as launch_error};
use crate::process::{CommandRunner, ExitOutcome};
use crate::ui::Console;

/// What happened during a launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    /// First line printed by the interpreter version query
    pub interpreter_version: String,
    /// `None` when the probe package was already present, otherwise whether
    /// the manifest install exited successfully
    pub install: Option<bool>,
    /// Outcome of the application itself
    pub app_exit: ExitOutcome,
    /// Exit code the launcher process should use
    pub exit_code: i32,
}

/// Launcher bound to a configuration, a command runner and a console
pub struct Launcher<'a> {
    config: &'a LauncherConfig,
    root: PathBuf,
    runner: &'a mut dyn CommandRunner,
    console: &'a mut dyn Console,
}

impl<'a> Launcher<'a> {
    /// Create a launcher; fails when the application root does not exist
    pub fn new(
        config: &'a LauncherConfig,
        runner: &'a mut dyn CommandRunner,
        console: &'a mut dyn Console,
    ) -> Result<Self> {
        let root = config.resolve_root()?;
        Ok(Self {
            config,
            root,
            runner,
            console,
        })
    }

    /// Resolved application root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run the whole pipeline
    pub fn run(&mut self) -> Result<LaunchReport> {
        self.console.set_title(&self.config.title);
        info!(root = %self.root.display(), "launching {}", self.config.title);
        self.console
            .info(&format!("Starting {}...", self.config.title));

        let interpreter_version = self.probe_interpreter()?;
        let install = self.ensure_dependencies()?;
        let app_exit = self.run_application()?;
        let exit_code = self.report(&app_exit);

        Ok(LaunchReport {
            interpreter_version,
            install,
            app_exit,
            exit_code,
        })
    }

    fn probe_interpreter(&mut self) -> Result<String> {
        let invocation = invocations::version_probe(self.config, &self.root);
        self.console
            .probe_started(&format!("Checking {}...", self.config.interpreter));
        let outcome = self.runner.run(&invocation);
        self.console.probe_finished();
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(LauncherError::SpawnFailed { reason, .. }) => {
                warn!(reason = %reason, "interpreter could not be started");
                ExitOutcome::not_found()
            }
            Err(e) => return Err(e),
        };

        if !outcome.success() {
            warn!(code = ?outcome.code, "interpreter probe failed");
            return Err(launch_error::interpreter_not_found(
                self.config.interpreter.clone(),
                self.config.download_url.clone(),
            ));
        }

        let version = outcome
            .output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string();
        info!(version = %version, "interpreter found");
        Ok(version)
    }

    fn ensure_dependencies(&mut self) -> Result<Option<bool>> {
        let probe = invocations::package_probe(self.config, &self.root);
        self.console
            .probe_started(&format!("Checking {}...", self.config.probe_package));
        let outcome = self.runner.run(&probe);
        self.console.probe_finished();

        if outcome?.success() {
            info!(package = %self.config.probe_package, "dependencies present");
            return Ok(None);
        }

        let manifest = self.config.manifest_path(&self.root);
        if self.config.strict_install && !manifest.is_file() {
            return Err(launch_error::manifest_not_found(
                manifest.display().to_string(),
            ));
        }

        self.console.info(&format!(
            "{} is not installed. Installing dependencies from {}...",
            self.config.probe_package,
            self.config.manifest.display()
        ));

        let install = invocations::install_manifest(self.config, &self.root);
        let outcome = self.runner.run(&install)?;
        if outcome.success() {
            info!("dependencies installed");
            return Ok(Some(true));
        }

        if self.config.strict_install {
            return Err(launch_error::install_failed(
                self.config.manifest.display().to_string(),
                outcome.code,
            ));
        }

        warn!(code = ?outcome.code, "dependency install failed, continuing");
        Ok(Some(false))
    }

    fn run_application(&mut self) -> Result<ExitOutcome> {
        self.console
            .info(&format!("Launching {}...", self.config.title));
        let invocation = invocations::application(self.config, &self.root);
        let outcome = self.runner.run(&invocation)?;
        info!(code = ?outcome.code, "application exited");
        Ok(outcome)
    }

    fn report(&mut self, app_exit: &ExitOutcome) -> i32 {
        if app_exit.success() {
            self.console
                .success(&format!("{} closed normally.", self.config.title));
            self.console.sleep(self.config.success_delay());
            return 0;
        }

        let code = app_exit
            .code
            .map_or_else(|| "none".to_string(), |c| c.to_string());
        self.console.failure(&format!(
            "{} exited with an error (exit code {code}).",
            self.config.title
        ));
        self.console.info(&format!(
            "Check the log files in {} for details.",
            self.config.log_dir_path(&self.root).display()
        ));
        if self.config.pause_on_failure {
            self.console.pause("Press any key to exit...");
        }

        if self.config.propagate_exit_code {
            app_exit.code.unwrap_or(1)
        } else {
            0
        }
    }
}
