use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `GETARG_LOG=debug`.
pub const LOG_ENV: &str = "GETARG_LOG";

/// Initialize tracing on stderr so stdout carries only the JSON report.
///
/// Defaults to `warn` when `GETARG_LOG` is unset or invalid. Calling this
/// twice is harmless; the second call is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .try_init();
}
