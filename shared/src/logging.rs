//! Shared logging utilities for consistent tracing across the planner crates

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Crates whose log level follows the configured base level
const WORKSPACE_TARGETS: [&str; 3] = ["webserver", "planner", "shared"];

/// Build the `EnvFilter` directive string for a base log level
pub fn filter_directives(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");

    let mut directives: Vec<String> = WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={base_level}"))
        .collect();
    directives.push(format!("tower_http={base_level}"));
    directives.push("axum=warn".to_string());
    directives.push("hyper=warn".to_string());
    directives.join(",")
}

/// Initialize the stdout tracing subscriber
///
/// `RUST_LOG` wins over `log_level` when set. Calling this more than once is
/// harmless; later calls keep the first subscriber.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(log_level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &str, details: &str) {
    info!(
        component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: &str, reason: &str) {
    info!(
        component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: &str, message: &str) {
    info!(
        component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
