//! # Session Directory Telemetry
//!
//! Logging setup shared by the session directory crates.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sd_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::for_subsystem("01", "announce-validation");
//! init_telemetry(&config).expect("logging already initialized");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SD_SERVICE_NAME` | `session-directory` | Service name in the startup event |
//! | `SD_SUBSYSTEM_ID` | `00` | Subsystem identifier |
//! | `SD_LOG_LEVEL` | `info` | Log level filter, falls back to `RUST_LOG` |
//! | `SD_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `SD_JSON_LOGS` | `false` (`true` in containers) | JSON formatted logs |

mod config;
mod logging;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::build_filter;

#[doc(hidden)]
pub use tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Install the global log subscriber described by `config`.
///
/// Can succeed at most once per process.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_setup::init_tracing(config)
}
