use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `SC_LOG=sc_compiler=debug`.
pub(crate) const LOG_ENV: &str = "SC_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr subscriber. Stdout stays reserved for command results.
pub(crate) fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
