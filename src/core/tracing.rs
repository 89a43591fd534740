//! Tracing module - Diagnostic output on stderr

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing when `var_name` holds a target filter.
pub fn setup(var_name: &str) {
    let targets_layer = std::env::var(var_name)
        .ok()
        .and_then(|filter| filter.parse::<tracing_subscriber::filter::Targets>().ok());

    if let Some(targets_layer) = targets_layer {
        let format_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(false)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(targets_layer)
            .with(format_layer)
            .init();
    }
}
