//! Logging setup.
//!
//! Logs go to stderr; stdout is reserved for the JSON Ansible reads.

use tracing_subscriber::EnvFilter;

/// Level used when `--verbose` is not given.
pub const DEFAULT_LEVEL: &str = "info";

/// Level used with `--verbose`.
pub const VERBOSE_LEVEL: &str = "debug";

/// Returns the filter directive for the given verbosity.
pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LEVEL
    } else {
        DEFAULT_LEVEL
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence when set.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
