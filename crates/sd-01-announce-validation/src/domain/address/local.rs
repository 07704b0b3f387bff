//! Snapshot of the addresses that identify this instance.

use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Addresses the running service answers on.
///
/// Loopback addresses are always members, whatever the snapshot was built
/// from. Addresses are stored in canonical form: IPv4-mapped IPv6 addresses
/// collapse to plain IPv4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAddressSet {
    addrs: HashSet<IpAddr>,
}

impl LocalAddressSet {
    /// The minimal set: `127.0.0.1` and `::1`.
    pub fn loopback() -> Self {
        let mut addrs = HashSet::with_capacity(2);
        addrs.insert(IpAddr::V4(Ipv4Addr::LOCALHOST));
        addrs.insert(IpAddr::V6(Ipv6Addr::LOCALHOST));
        Self { addrs }
    }

    /// Build a set from enumerated addresses, adding loopback.
    pub fn from_addrs<I>(addrs: I) -> Self
    where
        I: IntoIterator<Item = IpAddr>,
    {
        let mut set = Self::loopback();
        set.extend(addrs);
        set
    }

    /// Add a single address.
    pub fn insert(&mut self, ip: IpAddr) {
        self.addrs.insert(ip.to_canonical());
    }

    /// Add several addresses.
    pub fn extend<I>(&mut self, addrs: I)
    where
        I: IntoIterator<Item = IpAddr>,
    {
        for ip in addrs {
            self.insert(ip);
        }
    }

    /// Exact membership after canonicalization.
    pub fn contains(&self, ip: &IpAddr) -> bool {
        self.addrs.contains(&ip.to_canonical())
    }

    /// Whether a peer at `ip` is this instance.
    ///
    /// Every loopback address counts as self, including those outside the
    /// snapshot (`127.0.0.2`, `::ffff:127.0.0.1`).
    pub fn is_self(&self, ip: &IpAddr) -> bool {
        let ip = ip.to_canonical();
        ip.is_loopback() || self.addrs.contains(&ip)
    }

    /// Number of distinct addresses.
    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    /// Never true: loopback is always present.
    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    /// Iterate over the addresses in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &IpAddr> {
        self.addrs.iter()
    }
}

impl Default for LocalAddressSet {
    fn default() -> Self {
        Self::loopback()
    }
}

impl FromIterator<IpAddr> for LocalAddressSet {
    fn from_iter<T: IntoIterator<Item = IpAddr>>(iter: T) -> Self {
        Self::from_addrs(iter)
    }
}
