//! Logging setup shared by the crate binaries.

use tracing_subscriber::EnvFilter;

/// Picks the default filter directive for the verbosity flag.
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Builds the log filter, preferring `RUST_LOG` when it is set.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Installs a global `fmt` subscriber writing to stderr.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_tracing(verbose: bool) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
