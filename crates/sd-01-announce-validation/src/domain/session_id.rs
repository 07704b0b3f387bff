//! Session Identifier Validation
//!
//! A session id is either the server-assigned UUID in canonical dashed form
//! or a custom alias chosen by the session owner. Both are echoed to other
//! clients verbatim, so the alphabet is kept to letters, digits and hyphens.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

/// Length of the canonical `8-4-4-4-12` identifier; no alias may be longer.
pub const MAX_SESSION_ID_LEN: usize = 36;

/// Pre-compiled session id regex
static SESSION_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9-]{1,36}$").expect("session id validation regex is invalid")
});

/// Which flavour of session id was announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionIdKind {
    /// Server-assigned identifier in canonical dashed hexadecimal form.
    Canonical(Uuid),
    /// Custom human-chosen alias.
    Alias,
}

/// True iff `id` may be stored and echoed as a session id.
pub fn is_valid_session_id(id: &str) -> bool {
    SESSION_ID_REGEX.is_match(id)
}

/// Classify a session id, or `None` if it is invalid.
pub fn classify_session_id(id: &str) -> Option<SessionIdKind> {
    if !is_valid_session_id(id) {
        return None;
    }

    // try_parse also takes the 32-digit simple form; only the dashed one is canonical
    match Uuid::try_parse(id) {
        Ok(uuid) if id.len() == MAX_SESSION_ID_LEN => Some(SessionIdKind::Canonical(uuid)),
        _ => Some(SessionIdKind::Alias),
    }
}
