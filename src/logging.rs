//! Diagnostic logging to stderr
//!
//! User-facing status lines go through [`crate::ui::Console`]; this is the
//! `tracing` side channel enabled with `-v` or `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "pylaunch=warn",
        1 => "pylaunch=info",
        _ => "pylaunch=debug",
    }
}

/// Install the global subscriber; `RUST_LOG` wins over `-v`
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
