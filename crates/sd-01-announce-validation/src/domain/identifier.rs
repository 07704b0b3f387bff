//! JSONP Callback Name Validation
//!
//! The listing endpoint wraps its JSON in a client-chosen callback. Anything
//! but a bare identifier would be executed by the embedding page, so the
//! name must match the minimal script identifier grammar and nothing more.

use std::sync::LazyLock;

use regex::Regex;

/// Pre-compiled identifier regex
static IDENTIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*$").expect("identifier validation regex is invalid")
});

/// True iff `name` is a bare script identifier.
pub fn is_valid_identifier_name(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}
