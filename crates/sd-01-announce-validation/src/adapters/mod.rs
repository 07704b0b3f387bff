//! # Adapters
//!
//! Concrete implementations of the driven ports.
//!
//! ## Adapters Provided
//!
//! - `SystemLocalAddresses` - OS interface enumeration (requires "system-interfaces")
//! - `StaticLocalAddresses` - Fixed address list for tests and containers
//! - `CachedLocalAddresses` - Snapshot reuse for a bounded interval
//! - `StaticConfigProvider` - Hardcoded configuration
//! - `TomlConfigProvider` - Config file loading (requires "toml-config")

// Semantic submodules
/// Local address snapshot caching
pub mod cache;
/// Configuration providers
pub mod config;
/// Local address providers
pub mod interfaces;

// Re-export public API
pub use cache::CachedLocalAddresses;
pub use config::StaticConfigProvider;
pub use interfaces::StaticLocalAddresses;

#[cfg(feature = "system-interfaces")]
pub use interfaces::SystemLocalAddresses;

#[cfg(feature = "toml-config")]
pub use config::{ConfigError, TomlConfigProvider};
