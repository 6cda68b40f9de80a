//! Tracing subscriber setup for hosts embedding the client.

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "join=info";
const DEBUG_FILTER: &str = "join=debug";

/// Installs a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` the filter is `join=info`, or `join=debug` when
/// `JOIN_DEBUG` is set. Returns `false` if a global subscriber was already
/// installed, which makes repeated calls harmless.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive()));
    fmt().with_env_filter(filter).with_target(false).try_init().is_ok()
}

fn default_directive() -> &'static str {
    if std::env::var("JOIN_DEBUG").is_ok() {
        DEBUG_FILTER
    } else {
        DEFAULT_FILTER
    }
}
