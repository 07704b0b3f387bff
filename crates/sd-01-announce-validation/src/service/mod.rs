//! # Announcement Validation Service
//!
//! High-level service implementing the `AnnouncementValidationApi` port.
//!
//! The service owns the validation config and a local address provider, so
//! callers hand it raw announcement fields and the announcer's observed
//! address and get back a decision. Refresh policy for the local address set
//! is the provider's business (see `adapters::CachedLocalAddresses`).

// Semantic submodules
mod api;
mod core;

// Re-export public API
pub use self::core::AnnouncementValidator;
