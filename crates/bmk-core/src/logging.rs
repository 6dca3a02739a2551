//! Logging init: stderr only. stdout and the capture file carry payload,
//! so diagnostics must not mix into them.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr, honoring `RUST_LOG` if set.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bmk_core=debug,bmk_cli=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
