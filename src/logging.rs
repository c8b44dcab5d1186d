use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CIPHERGEN_LOG";

/// Installs the stderr subscriber. Level comes from `CIPHERGEN_LOG`, default `warn`.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
