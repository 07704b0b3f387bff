//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces this crate **requires** the host application to
//! implement, or to pick from `adapters`.

use crate::domain::{LocalAddressSet, ValidationConfig};

/// Source of the addresses this instance considers itself.
///
/// # Contract
///
/// The returned set always contains loopback. Implementations must not
/// fail: if enumeration breaks they log and fall back to
/// `LocalAddressSet::loopback()`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one provider is shared by every
/// request-handling task.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct ContainerAddresses(Vec<IpAddr>);
///
/// impl LocalAddressProvider for ContainerAddresses {
///     fn local_addresses(&self) -> LocalAddressSet {
///         LocalAddressSet::from_addrs(self.0.iter().copied())
///     }
/// }
/// ```
pub trait LocalAddressProvider: Send + Sync {
    /// Current snapshot of local addresses.
    fn local_addresses(&self) -> LocalAddressSet;
}

impl<P: LocalAddressProvider + ?Sized> LocalAddressProvider for std::sync::Arc<P> {
    fn local_addresses(&self) -> LocalAddressSet {
        (**self).local_addresses()
    }
}

/// Abstract interface for configuration loading.
///
/// Allows different configuration sources (file, environment, etc.)
pub trait ConfigProvider: Send + Sync {
    /// Validation tunables.
    fn validation_config(&self) -> ValidationConfig;
}
