use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::trace;

use crate::domain::LocalAddressSet;
use crate::ports::LocalAddressProvider;

/// Reuses a provider's snapshot for up to `ttl`.
///
/// Interface sets change under dynamic networking, so the snapshot always
/// expires; a zero `ttl` disables reuse.
pub struct CachedLocalAddresses<P> {
    inner: P,
    ttl: Duration,
    snapshot: RwLock<Option<Snapshot>>,
}

struct Snapshot {
    taken_at: Instant,
    addrs: LocalAddressSet,
}

impl<P: LocalAddressProvider> CachedLocalAddresses<P> {
    /// Wrap `inner`, reusing each snapshot for `ttl`.
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            snapshot: RwLock::new(None),
        }
    }

    /// Drop the snapshot, e.g. after an interface change notification.
    pub fn invalidate(&self) {
        *self.snapshot.write() = None;
    }

    /// How long a snapshot is reused.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<P: LocalAddressProvider> LocalAddressProvider for CachedLocalAddresses<P> {
    fn local_addresses(&self) -> LocalAddressSet {
        if let Some(snapshot) = self.snapshot.read().as_ref() {
            if snapshot.taken_at.elapsed() < self.ttl {
                return snapshot.addrs.clone();
            }
        }

        let addrs = self.inner.local_addresses();
        trace!(count = addrs.len(), "Refreshed local address snapshot");
        *self.snapshot.write() = Some(Snapshot {
            taken_at: Instant::now(),
            addrs: addrs.clone(),
        });
        addrs
    }
}
