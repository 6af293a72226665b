//! Unified test logging initialization.
//!
//! Single source of truth for test logging, shared by unit tests (via the
//! ctor hook in lib.rs) and integration tests (via tests/common). Uses a
//! one-time guard so repeated calls never panic.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe. The log level is read from `TEST_LOG`, then
/// `RUST_LOG`, defaulting to `warn`. Output goes through the test writer
/// so cargo captures it per-test.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
