//! Test-only helpers.

/// Installs a test-writer tracing subscriber once per test binary.
/// `RUST_LOG` overrides the default of tracing this crate's events.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tolerance=trace"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
