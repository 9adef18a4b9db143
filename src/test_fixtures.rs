//! Scripted collaborators for driving the launcher in unit tests

use std::time::Duration;

use crate::error::{Result, launch as launch_error};
use crate::process::{CommandRunner, ExitOutcome, Invocation};
use crate::ui::Console;

/// Environment the scripted runner pretends to be
#[derive(Debug, Clone)]
pub struct ScriptedEnvironment {
    pub interpreter_present: bool,
    /// Exit code of the interpreter's version query
    pub version_code: i32,
    pub version_output: String,
    /// The interpreter exists but the OS refuses to start it
    pub interpreter_unspawnable: bool,
    pub package_installed: bool,
    pub install_code: i32,
    pub app_code: Option<i32>,
}

impl Default for ScriptedEnvironment {
    fn default() -> Self {
        Self {
            interpreter_present: true,
            version_code: 0,
            version_output: "Python 3.11.4\n".to_string(),
            interpreter_unspawnable: false,
            package_installed: true,
            install_code: 0,
            app_code: Some(0),
        }
    }
}

/// Runner answering from a [`ScriptedEnvironment`] and recording every call
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    pub env: ScriptedEnvironment,
    pub calls: Vec<Invocation>,
}

impl ScriptedRunner {
    pub fn new(env: ScriptedEnvironment) -> Self {
        Self {
            env,
            calls: Vec::new(),
        }
    }

    /// Recorded calls whose arguments start with `prefix`
    pub fn calls_starting_with(&self, prefix: &[&str]) -> usize {
        self.calls
            .iter()
            .filter(|inv| {
                inv.args.len() >= prefix.len()
                    && inv.args.iter().zip(prefix).all(|(a, p)| a == p)
            })
            .count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ExitOutcome> {
        self.calls.push(invocation.clone());

        if !self.env.interpreter_present {
            return Ok(ExitOutcome::not_found());
        }
        if self.env.interpreter_unspawnable {
            return Err(launch_error::spawn_failed(
                invocation.program.clone(),
                "Permission denied (os error 13)",
            ));
        }

        let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();
        let outcome = match args.as_slice() {
            ["--version"] => ExitOutcome::from_code(self.env.version_code)
                .with_output(self.env.version_output.clone()),
            ["-m", "pip", "show", ..] => {
                ExitOutcome::from_code(i32::from(!self.env.package_installed))
            }
            ["-m", "pip", "install", ..] => ExitOutcome::from_code(self.env.install_code),
            _ => ExitOutcome {
                code: self.env.app_code,
                output: String::new(),
            },
        };
        Ok(outcome)
    }
}

/// What the recording console was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Title(String),
    Info(String),
    Success(String),
    Failure(String),
    ProbeStarted(String),
    ProbeFinished,
    Pause(String),
    Sleep(Duration),
}

/// Console that records instead of printing
#[derive(Debug, Default)]
pub struct RecordingConsole {
    pub events: Vec<ConsoleEvent>,
}

impl RecordingConsole {
    pub fn paused(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, ConsoleEvent::Pause(_)))
    }

    pub fn slept(&self) -> Option<Duration> {
        self.events.iter().find_map(|e| match e {
            ConsoleEvent::Sleep(d) => Some(*d),
            _ => None,
        })
    }

    /// All printed text, one entry per line
    pub fn lines(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ConsoleEvent::Info(s) | ConsoleEvent::Success(s) | ConsoleEvent::Failure(s) => {
                    Some(s.clone())
                }
                _ => None,
            })
            .collect()
    }
}

impl Console for RecordingConsole {
    fn set_title(&mut self, title: &str) {
        self.events.push(ConsoleEvent::Title(title.to_string()));
    }

    fn info(&mut self, message: &str) {
        self.events.push(ConsoleEvent::Info(message.to_string()));
    }

    fn success(&mut self, message: &str) {
        self.events.push(ConsoleEvent::Success(message.to_string()));
    }

    fn failure(&mut self, message: &str) {
        self.events.push(ConsoleEvent::Failure(message.to_string()));
    }

    fn probe_started(&mut self, label: &str) {
        self.events.push(ConsoleEvent::ProbeStarted(label.to_string()));
    }

    fn probe_finished(&mut self) {
        self.events.push(ConsoleEvent::ProbeFinished);
    }

    fn pause(&mut self, prompt: &str) {
        self.events.push(ConsoleEvent::Pause(prompt.to_string()));
    }

    fn sleep(&mut self, duration: Duration) {
        self.events.push(ConsoleEvent::Sleep(duration));
    }
}
