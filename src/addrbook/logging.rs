use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Installs the global subscriber. `RUST_LOG` wins when set; otherwise only
/// warnings, or debug output with `verbose`. Logs go to stderr so they never
/// mix with command output.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time();

    // A subscriber may already be installed (tests); keep it.
    let _ = Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
