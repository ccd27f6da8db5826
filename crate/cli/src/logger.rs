use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOG_INIT: Once = Once::new();

/// Initialize the tracing subscriber once, reading the filter from
/// `RUST_LOG`. Nothing is emitted when the variable is unset.
pub fn log_init() {
    LOG_INIT.call_once(tracing_setup);
}

fn tracing_setup() {
    let format = tracing_subscriber::fmt::layer()
        .with_level(true)
        .with_target(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(format)
        .init();
}
