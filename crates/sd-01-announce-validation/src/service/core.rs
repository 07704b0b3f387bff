//! Core service struct and constructors.

use crate::domain::{LocalAddressSet, ValidationConfig};
use crate::ports::{ConfigProvider, LocalAddressProvider};

/// Validates announcements against the trust policy.
///
/// Generic over the local address provider so tests can pin the set of
/// self addresses.
pub struct AnnouncementValidator<P: LocalAddressProvider> {
    pub(super) config: ValidationConfig,
    pub(super) local: P,
}

impl<P: LocalAddressProvider> AnnouncementValidator<P> {
    /// Create a validator from explicit config and provider.
    pub fn new(config: ValidationConfig, local: P) -> Self {
        Self { config, local }
    }

    /// Create a validator reading its config from a `ConfigProvider`.
    pub fn from_config_provider<C: ConfigProvider + ?Sized>(provider: &C, local: P) -> Self {
        Self::new(provider.validation_config(), local)
    }

    /// Active validation config.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Provider snapshot merged with the configured extra addresses.
    pub fn local_addresses(&self) -> LocalAddressSet {
        let mut set = self.local.local_addresses();
        set.extend(self.config.extra_local_addresses.iter().copied());
        set
    }
}

#[cfg(feature = "system-interfaces")]
impl
    AnnouncementValidator<
        crate::adapters::CachedLocalAddresses<crate::adapters::SystemLocalAddresses>,
    >
{
    /// Production wiring: OS interfaces, re-enumerated after the
    /// configured refresh interval.
    pub fn with_system_interfaces(config: ValidationConfig) -> Self {
        let local = crate::adapters::CachedLocalAddresses::new(
            crate::adapters::SystemLocalAddresses::new(),
            config.refresh_interval(),
        );
        Self::new(config, local)
    }
}
