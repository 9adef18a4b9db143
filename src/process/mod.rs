//! Subprocess execution
//!
//! Every external command the launcher issues goes through [`CommandRunner`],
//! so the launcher pipeline can be driven by scripted outcomes in tests.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Result, launch as launch_error};

/// How the child's standard streams are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Share the launcher's console for interactive I/O
    Inherit,
    /// No stdin, output captured and returned
    Quiet,
}

/// A single external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub stdio: StdioMode,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
            stdio: StdioMode::Inherit,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.stdio = StdioMode::Quiet;
        self
    }

    /// Command line as typed in a shell, for logs and messages
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of running an [`Invocation`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code; `None` when the program could not be found or was killed
    pub code: Option<i32>,
    /// Captured stdout followed by stderr (quiet invocations only)
    pub output: String,
}

impl ExitOutcome {
    #[cfg(test)]
    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            output: String::new(),
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Outcome of a program that is not on PATH
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands to completion
pub trait CommandRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ExitOutcome>;
}

/// Runs commands with `std::process::Command`, blocking until they exit
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ExitOutcome> {
        debug!(command = %invocation.command_line(), cwd = %invocation.cwd.display(), "running");

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args).current_dir(&invocation.cwd);

        let result = match invocation.stdio {
            StdioMode::Inherit => cmd.status().map(|status| ExitOutcome {
                code: status.code(),
                output: String::new(),
            }),
            StdioMode::Quiet => {
                cmd.stdin(Stdio::null());
                cmd.output().map(|out| {
                    let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
                    output.push_str(&String::from_utf8_lossy(&out.stderr));
                    ExitOutcome {
                        code: out.status.code(),
                        output,
                    }
                })
            }
        };

        match result {
            Ok(outcome) => {
                debug!(code = ?outcome.code, "exited");
                Ok(outcome)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(program = %invocation.program, "program not found");
                Ok(ExitOutcome::not_found())
            }
            Err(e) => Err(launch_error::spawn_failed(
                invocation.program.clone(),
                e.to_string(),
            )),
        }
    }
}
