//! Shared helpers for unit tests.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a test-writer subscriber once; later calls are no-ops.
///
/// Honors `RUST_LOG`, defaulting to `debug`.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}
