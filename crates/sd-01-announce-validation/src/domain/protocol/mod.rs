//! # Protocol Version Validation
//!
//! The directory moved from flat `major.minor` protocol numbers to
//! namespaced versions (`dp:4.20.1`). Both are accepted while the
//! transition lasts, unless an operator pins the service to a whitelist.
//!
//! - **Whitelist mode**: exact string match, no format inference
//! - **Format mode**: legacy two-component or namespaced three-plus shape

// Semantic submodules
mod validate;
mod version;

// Re-export public API
pub use validate::{is_valid_protocol, is_well_formed_protocol, is_whitelisted_protocol};
pub use version::ProtocolVersion;
