//! Diagnostic log setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity setting
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Build the log filter, letting `RUST_LOG` override the default
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install a stderr subscriber for the process
///
/// Does nothing if a global subscriber is already installed.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
