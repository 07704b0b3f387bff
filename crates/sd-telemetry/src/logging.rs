//! Structured log helpers.
//!
//! Every event carries a `component` field naming the part of the directory
//! that emitted it (`announce`, `config`, `interfaces`), so JSON logs can be
//! filtered per component without parsing messages.

/// Emit a `tracing` event with a `component` field.
///
/// # Example
///
/// ```rust
/// use sd_telemetry::log_event;
///
/// let announcer = "198.51.100.20";
/// log_event!(warn, "announce", "rejected host claim", announcer = %announcer, reason = "trust_violation");
/// log_event!(info, "config", "whitelist loaded");
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:ident, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        $crate::tracing::$level!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log an announcement decision with the announcer address attached.
#[macro_export]
macro_rules! log_announce_event {
    ($level:ident, $msg:expr, $announcer:expr $(, $($field:tt)*)?) => {
        $crate::tracing::$level!(
            component = "announce",
            announcer = %$announcer,
            $($($field)*,)?
            $msg
        )
    };
}
