//! Real terminal console backed by `console` and `indicatif`

use std::time::Duration;

use console::{Style, Term};

use super::Console;
use crate::progress::ProbeSpinner;

/// Console writing to stdout with a green-on-default scheme
pub struct TerminalConsole {
    term: Term,
    scheme: Style,
    success_style: Style,
    failure_style: Style,
    spinner: Option<ProbeSpinner>,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            scheme: Style::new().green().bright(),
            success_style: Style::new().green().bold(),
            failure_style: Style::new().red().bold(),
            spinner: None,
        }
    }

    fn write(&self, line: &str) {
        // A closed stdout must not abort the launch
        let _ = self.term.write_line(line);
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn set_title(&mut self, title: &str) {
        self.term.set_title(title);
        self.write(&self.scheme.apply_to(format!("=== {title} ===")).to_string());
    }

    fn info(&mut self, message: &str) {
        self.write(&self.scheme.apply_to(message).to_string());
    }

    fn success(&mut self, message: &str) {
        self.write(&self.success_style.apply_to(format!("✓ {message}")).to_string());
    }

    fn failure(&mut self, message: &str) {
        self.write(&self.failure_style.apply_to(format!("✗ {message}")).to_string());
    }

    fn probe_started(&mut self, label: &str) {
        self.probe_finished();
        self.spinner = Some(ProbeSpinner::start(label));
    }

    fn probe_finished(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish();
        }
    }

    fn pause(&mut self, prompt: &str) {
        self.probe_finished();
        self.write(prompt);
        // Returns immediately when stdin is not a terminal
        let _ = self.term.read_key();
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
