//! Whitelist and format checks, composed by a thin dispatcher.

use super::ProtocolVersion;

/// Accept `version` under the active mode.
///
/// A non-empty whitelist switches format inference off entirely.
pub fn is_valid_protocol<S: AsRef<str>>(version: &str, whitelist: &[S]) -> bool {
    if whitelist.is_empty() {
        is_well_formed_protocol(version)
    } else {
        is_whitelisted_protocol(version, whitelist)
    }
}

/// Exact, case-sensitive match against a whitelist entry.
pub fn is_whitelisted_protocol<S: AsRef<str>>(version: &str, whitelist: &[S]) -> bool {
    whitelist.iter().any(|entry| entry.as_ref() == version)
}

/// Legacy `major.minor` or namespaced `ns:a.b.c[...]`.
pub fn is_well_formed_protocol(version: &str) -> bool {
    ProtocolVersion::parse(version).is_some()
}
