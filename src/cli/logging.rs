//! Tracing subscriber setup for the binary.

use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,glot_codemod=debug";

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Logs always go to stderr so `print` output stays clean on stdout.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed when embedded in tests.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
