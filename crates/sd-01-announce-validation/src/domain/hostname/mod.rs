//! # Hostname Claim Validation
//!
//! Decides whether an announcer may advertise `claimed_host` as the address
//! clients should connect to.
//!
//! ## Trust Policy
//!
//! 1. A claim embedding a URL scheme or path is always refused.
//! 2. A local announcer (this instance or loopback) may claim any non-empty
//!    host, including IP literals and `localhost`. It must not leave the
//!    claim empty, because its observed address is useless to clients.
//! 3. A remote announcer may omit the claim (its observed address is used)
//!    or claim a DNS name. Address literals and loopback names are refused,
//!    as are hex or octal spellings that `inet_aton`-style resolvers read
//!    as an address (`0x7f000001`, `0x7f.1`).

use std::net::IpAddr;

use crate::domain::address::{is_ip_literal, is_named_host, LocalAddressSet};
use crate::domain::RejectionReason;

/// Names that resolve to the loopback interface on common resolvers.
const LOOPBACK_NAMES: &[&str] = &[
    "localhost",
    "localhost.localdomain",
    "ip6-localhost",
    "ip6-loopback",
];

/// Validate a claimed host against the announcer's observed address.
///
/// `local` is the caller's current snapshot of this instance's addresses.
pub fn validate_hostname(
    claimed_host: &str,
    announcer: IpAddr,
    local: &LocalAddressSet,
) -> Result<(), RejectionReason> {
    if has_scheme_or_path(claimed_host) {
        return Err(RejectionReason::SchemeOrPathPresent);
    }

    if local.is_self(&announcer) {
        validate_trusted(claimed_host)
    } else {
        validate_untrusted(claimed_host)
    }
}

/// Whether `host` names the loopback interface.
///
/// Case-insensitive, tolerates one trailing dot, and covers every
/// subdomain of `localhost`.
pub fn is_loopback_name(host: &str) -> bool {
    let name = host.strip_suffix('.').unwrap_or(host);
    if LOOPBACK_NAMES.iter().any(|n| n.eq_ignore_ascii_case(name)) {
        return true;
    }

    const SUFFIX: &str = ".localhost";
    name.len() > SUFFIX.len()
        && name.is_char_boundary(name.len() - SUFFIX.len())
        && name[name.len() - SUFFIX.len()..].eq_ignore_ascii_case(SUFFIX)
}

fn has_scheme_or_path(host: &str) -> bool {
    host.contains("://") || host.contains('/')
}

fn validate_trusted(claimed_host: &str) -> Result<(), RejectionReason> {
    if claimed_host.is_empty() {
        return Err(RejectionReason::LocalRequiresExplicitHost);
    }
    Ok(())
}

fn validate_untrusted(claimed_host: &str) -> Result<(), RejectionReason> {
    // Empty: the caller substitutes the observed address
    if claimed_host.is_empty() {
        return Ok(());
    }

    if is_ip_literal(claimed_host) || is_loopback_name(claimed_host) {
        return Err(RejectionReason::TrustViolation);
    }

    if !is_named_host(claimed_host)
        || !has_host_charset(claimed_host)
        || is_numeric_lookalike(claimed_host)
    {
        return Err(RejectionReason::InvalidShape);
    }

    Ok(())
}

/// Letters, digits, hyphen, underscore and dot only.
fn has_host_charset(host: &str) -> bool {
    host.bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

/// Every dot-separated label is a decimal, octal or `0x` hex number.
///
/// Legacy resolvers parse such names as IPv4 addresses, so they are not
/// DNS names even when they contain letters.
fn is_numeric_lookalike(host: &str) -> bool {
    let name = host.strip_suffix('.').unwrap_or(host);
    !name.is_empty() && name.split('.').all(is_numeric_label)
}

fn is_numeric_label(label: &str) -> bool {
    let hex = label
        .strip_prefix("0x")
        .or_else(|| label.strip_prefix("0X"));
    match hex {
        Some(digits) => digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()),
    }
}
