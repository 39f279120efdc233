use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("mtdu=debug")
        } else {
            EnvFilter::new("mtdu=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
