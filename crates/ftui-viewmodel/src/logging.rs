#![forbid(unsafe_code)]

//! JSON log output for view-model notifications.
//!
//! Notifications are emitted under the `ftui_viewmodel` target: `trace` for
//! each delivery and skipped set, `debug` for suspend/resume. Filtering uses
//! `RUST_LOG`, e.g. `RUST_LOG=ftui_viewmodel=trace`.

use tracing_subscriber::EnvFilter;

/// Error returned when a global subscriber is already installed.
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install a global JSON subscriber filtered by `RUST_LOG`.
///
/// # Errors
///
/// Fails if another global subscriber was set first.
pub fn init_json() -> Result<(), InitError> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
}
