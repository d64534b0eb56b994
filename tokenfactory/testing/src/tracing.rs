use {
    std::sync::Once,
    tracing_subscriber::{EnvFilter, FmtSubscriber},
};

// The global subscriber can only be installed once per process.
static TRACING: Once = Once::new();

/// Print module logs at `level` and above. Safe to call from every test.
pub fn setup_tracing_subscriber(level: tracing::Level) {
    TRACING.call_once(|| {
        let filter = EnvFilter::new(level.to_string());

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_test_writer()
            .finish();

        // Another harness may already have installed one; that's fine.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
