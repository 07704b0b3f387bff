use std::net::IpAddr;

use crate::domain::LocalAddressSet;
use crate::ports::LocalAddressProvider;

// ============================================================================
// StaticLocalAddresses - Fixed list for testing and pinned deployments
// ============================================================================

/// Provider returning a fixed address list plus loopback.
#[derive(Debug, Clone, Default)]
pub struct StaticLocalAddresses {
    addrs: Vec<IpAddr>,
}

impl StaticLocalAddresses {
    /// Loopback only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loopback plus `addrs`.
    #[must_use]
    pub fn with_addrs(addrs: Vec<IpAddr>) -> Self {
        Self { addrs }
    }
}

impl LocalAddressProvider for StaticLocalAddresses {
    fn local_addresses(&self) -> LocalAddressSet {
        LocalAddressSet::from_addrs(self.addrs.iter().copied())
    }
}

// ============================================================================
// SystemLocalAddresses - Production enumeration (requires "system-interfaces")
// ============================================================================

#[cfg(feature = "system-interfaces")]
mod system {
    use super::*;
    use std::io;
    use tracing::{debug, warn};

    /// Provider enumerating the addresses bound to this host's interfaces.
    ///
    /// Every call hits the operating system; wrap it in
    /// `CachedLocalAddresses` for per-announcement use.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemLocalAddresses;

    impl SystemLocalAddresses {
        #[must_use]
        pub fn new() -> Self {
            Self
        }
    }

    impl LocalAddressProvider for SystemLocalAddresses {
        fn local_addresses(&self) -> LocalAddressSet {
            snapshot_from(if_addrs::get_if_addrs())
        }
    }

    /// Turn an enumeration result into a snapshot; failure degrades to
    /// loopback only.
    pub(super) fn snapshot_from(
        result: io::Result<Vec<if_addrs::Interface>>,
    ) -> LocalAddressSet {
        match result {
            Ok(interfaces) => {
                let set = LocalAddressSet::from_addrs(interfaces.iter().map(|i| i.ip()));
                debug!(count = set.len(), "Enumerated local addresses");
                set
            }
            Err(e) => {
                warn!(error = %e, "Interface enumeration failed, trusting loopback only");
                LocalAddressSet::loopback()
            }
        }
    }
}

#[cfg(feature = "system-interfaces")]
pub use system::SystemLocalAddresses;
