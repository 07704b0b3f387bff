//! # Attack Simulations
//!
//! Hostile inputs a remote announcer or listing client can send, and the
//! decision the directory must reach for each.
//!
//! | Attack | Target | Expected outcome |
//! |--------|--------|------------------|
//! | Loopback/address redirect | host claim | `TrustViolation` |
//! | URL smuggling | host claim | `SchemeOrPathPresent` |
//! | Header/charset injection | host claim | `InvalidShape` |
//! | Hex/octal address spelling | host claim | `InvalidShape` |
//! | Path traversal, markup in id | session id | `InvalidSessionId` |
//! | Version string padding | protocol | `UnsupportedProtocol` |
//! | JSONP callback injection | callback name | rejected |
