//! Shared setup for the vmbench benchmark binaries.

#![warn(clippy::all)]
#![warn(missing_docs)]

use tracing_subscriber::filter::EnvFilter;

/// Route diagnostics to stderr, gated by `RUST_LOG`.
///
/// stdout is reserved for the measurements themselves; with no `RUST_LOG`
/// set, the binaries print nothing but their numbers.
pub fn init_diagnostics() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
