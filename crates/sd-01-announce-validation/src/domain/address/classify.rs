//! String classifiers for host claims.
//!
//! SECURITY-CRITICAL: a remote announcer must not be able to smuggle an
//! address literal past `is_named_host`. Isolate for security audits.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// True iff `s` is a valid IPv6 literal, full or compressed.
///
/// IPv4 literals and the empty string are not IPv6 addresses.
pub fn is_ipv6_address(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

/// True iff `s` is a dotted-quad IPv4 literal.
pub fn is_ipv4_address(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

/// True iff `s` denotes an IP address in any form a client might resolve
/// as one.
///
/// Besides plain literals this accepts URI-bracketed IPv6 (`[::1]`) and
/// scoped IPv6 with a zone suffix (`fe80::1%eth0`).
pub fn is_ip_literal(s: &str) -> bool {
    if s.parse::<IpAddr>().is_ok() {
        return true;
    }

    let unbracketed = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(s);

    // Zone ids ride after '%' and are not part of the address itself
    let address = match unbracketed.split_once('%') {
        Some((address, zone)) if !zone.is_empty() => address,
        Some(_) => return false,
        None => unbracketed,
    };

    is_ipv6_address(address)
}

/// True iff `s` has the shape of a DNS host name.
///
/// The string must be non-empty, must not be an IP literal, and must hold
/// at least one ASCII letter. The letter rule catches numeric strings such
/// as `"123"` or `"10.0.0.1.5"` that fail strict IP parsing but would still
/// be read as addresses by downstream resolvers.
pub fn is_named_host(s: &str) -> bool {
    !s.is_empty() && !is_ip_literal(s) && s.bytes().any(|b| b.is_ascii_alphabetic())
}
