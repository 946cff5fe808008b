//! Browser console logging

use crate::config::AppConfig;
use tracing_subscriber::{EnvFilter, fmt::format::Pretty, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::{MakeWebConsoleWriter, performance_layer};

/// Route panics and `tracing` events to the browser console
pub fn init_logging() {
    console_error_panic_hook::set_once();

    let env_filter =
        EnvFilter::try_new(AppConfig::LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("info"));

    // No clock on wasm32-unknown-unknown, the console stamps entries itself
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .with(env_filter)
        .init();
}
