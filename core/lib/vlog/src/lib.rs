//! A set of logging macros that print not only timestamp and log level,
//! but also filename, line and column.
//!
//! They behave just like usual tracing::warn, tracing::info, etc.
//!
//! Call [`init`] once at the start of a binary to install the subscriber.
//! Logs always go to stderr, so tools that print their result to stdout
//! stay pipeable.

use tracing_subscriber::EnvFilter;

pub use tracing::{debug, info, trace};

#[doc(hidden)]
pub use tracing;

/// Default filter directive when `RUST_LOG` is not set.
const DEFAULT_DIRECTIVE: &str = "info";
/// Filter directive used when verbose output is requested.
const VERBOSE_DIRECTIVE: &str = "debug";

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(
            "[{}:{}:{}] {}",
            file!(),
            line!(),
            column!(),
            format!($($arg)*)
        );
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(
            "[{}:{}:{}] {}",
            file!(),
            line!(),
            column!(),
            format!($($arg)*)
        );
    };
}

/// Builds the filter for the global subscriber.
///
/// `verbose` wins over `RUST_LOG`: the `--debug` switch of our tools must
/// always produce debug output.
fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_DIRECTIVE)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
    }
}

/// Installs the global `tracing` subscriber.
///
/// Calling it more than once is harmless: only the first call takes effect,
/// which keeps tests that exercise binaries' entry points independent.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .try_init();
}
