//! Console presentation layer
//!
//! Everything the launcher shows to the person in front of the terminal goes
//! through the [`Console`] trait, so the launcher can be driven against a
//! recording console in tests and against the real terminal otherwise.

pub mod terminal;

use std::time::Duration;

pub use terminal::TerminalConsole;

/// User-facing console
pub trait Console {
    /// Set the terminal window title and color scheme
    fn set_title(&mut self, title: &str);

    /// Plain status line
    fn info(&mut self, message: &str);

    /// Success line
    fn success(&mut self, message: &str);

    /// Failure line
    fn failure(&mut self, message: &str);

    /// A quiet probe is running (e.g. interpreter version query)
    fn probe_started(&mut self, label: &str);

    /// The running probe has finished
    fn probe_finished(&mut self);

    /// Block until the user presses a key
    fn pause(&mut self, prompt: &str);

    /// Wait unattended
    fn sleep(&mut self, duration: Duration);
}
