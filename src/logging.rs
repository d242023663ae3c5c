use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes tracing with a human-readable console layer and a JSON
/// file layer rotated daily under `logs/`.
pub fn init_logging() {
    let _ = fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "wayfare.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().json().with_writer(file_writer);
    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stdout);

    let filter = EnvFilter::from_default_env().add_directive("wayfare=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // Keep the appender guard alive for the process lifetime so buffered
    // log lines are flushed on exit.
    std::mem::forget(guard);
}
