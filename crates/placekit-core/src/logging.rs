//! Logging integration for placekit.
//!
//! Provides a helper for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings).

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level` (e.g. "debug", "info",
/// "warn", "error"). In debug mode a pretty, human-readable format is used;
/// in production a structured JSON format is used.
///
/// Installing a subscriber when one is already set is a no-op, so calling
/// this repeatedly (e.g. across tests) is safe.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one outgoing API operation.
///
/// Attach this span around a request so that everything logged while it is
/// built, intercepted, and sent carries the method and URL.
///
/// # Examples
///
/// ```
/// use placekit_core::logging::operation_span;
///
/// let span = operation_span("POST", "/api/places/");
/// let _guard = span.enter();
/// tracing::info!("creating place");
/// ```
pub fn operation_span(method: &str, url: &str) -> tracing::Span {
    tracing::info_span!("api_operation", %method, %url)
}
