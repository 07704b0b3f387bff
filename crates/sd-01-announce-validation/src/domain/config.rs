//! Validation Configuration

use std::net::IpAddr;
use std::time::Duration;

/// Tunables for announcement validation.
///
/// # Notes
///
/// - `protocol_whitelist`: when non-empty, only these exact protocol strings
///   are accepted and format inference is off.
/// - `local_address_refresh_secs`: how long a local address snapshot may be
///   reused before interfaces are enumerated again. Zero re-enumerates on
///   every announcement.
/// - `extra_local_addresses`: addresses that count as this instance even
///   though no interface carries them (e.g. a NAT public address).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Exact protocol strings to accept (default: empty, format mode)
    pub protocol_whitelist: Vec<String>,
    /// Local address snapshot lifetime (default: 60 seconds)
    pub local_address_refresh_secs: u64,
    /// Additional self addresses (default: none)
    pub extra_local_addresses: Vec<IpAddr>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            protocol_whitelist: Vec::new(),
            local_address_refresh_secs: 60,
            extra_local_addresses: Vec::new(),
        }
    }
}

impl ValidationConfig {
    /// Create a config suitable for testing (no snapshot reuse)
    pub fn for_testing() -> Self {
        Self {
            local_address_refresh_secs: 0,
            ..Self::default()
        }
    }

    /// Pin accepted protocols to `whitelist`.
    #[must_use]
    pub fn with_protocol_whitelist<I, S>(mut self, whitelist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protocol_whitelist = whitelist.into_iter().map(Into::into).collect();
        self
    }

    /// Add self addresses beyond the enumerated interfaces.
    #[must_use]
    pub fn with_extra_local_addresses(mut self, addrs: Vec<IpAddr>) -> Self {
        self.extra_local_addresses = addrs;
        self
    }

    /// Snapshot lifetime for cached local addresses.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.local_address_refresh_secs)
    }
}
