//! Spinner display for quiet probes

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a probe command runs with captured output
pub struct ProbeSpinner {
    pb: ProgressBar,
}

impl ProbeSpinner {
    /// Start a spinner with the given label
    pub fn start(label: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(label.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb }
    }

    /// Remove the spinner from the terminal
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}
