//! # Address Classification
//!
//! Pure string classifiers used at the trust boundary, and the set of
//! addresses the running instance answers on.
//!
//! - `is_ipv6_address` - syntactic IPv6 literal check
//! - `is_named_host` - DNS-name shape (never an IP literal, never all digits)
//! - `LocalAddressSet` - loopback plus bound interface addresses

// Semantic submodules
mod classify;
mod local;

// Re-export public API
pub use classify::{is_ip_literal, is_ipv4_address, is_ipv6_address, is_named_host};
pub use local::LocalAddressSet;
