/// Tracing subscriber setup.
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs always go to stderr: stdout carries command output that other tools
/// parse. `RUST_LOG` wins over the default level when set.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
