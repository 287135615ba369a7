use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn,tower_http=info";

/// Initialize logging with structured JSON output
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Logging initialized");
}

/// Initialize logging with pretty output for development
pub fn init_logging_pretty() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("debug,hyper=warn,reqwest=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Logging initialized (pretty mode)");
}

/// Pick the output format from `LOG_FORMAT` (`json` by default, `pretty` for development)
pub fn init_from_env() {
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("pretty") => init_logging_pretty(),
        _ => init_logging(),
    }
}
