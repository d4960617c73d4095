use tracing_subscriber::{EnvFilter, fmt};

/// Logs to stderr at `page_builder=info` unless `RUST_LOG` says otherwise.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("page_builder=info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
