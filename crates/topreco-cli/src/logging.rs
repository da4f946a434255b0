use topreco_types::ids;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `TOPRECO_LOG` wins over `-v`; without either only warnings are shown.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(ids::ENV_TOPRECO_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // Already installed is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
