use super::map::{Lookup, ResourceHandle, ResourceMap};
use super::{AsyncHook, AsyncId, ResourceKind};
use crate::zone::{self, Zone};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use tracing::{debug, warn};

static GLOBAL: OnceLock<LifecycleBridge> = OnceLock::new();

/// Stamps async resources with their creator's zone and restores that zone
/// before each invocation.
///
/// Restoration on `before` is left in place: the bridge does not know when
/// the callback ends, so the host overwrites the current zone at its next
/// scheduling point.
#[derive(Debug, Default)]
pub struct LifecycleBridge {
    resources: Mutex<ResourceMap>,
    faults: AtomicU64,
}

impl LifecycleBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide bridge shared by every host adapter
    pub fn global() -> &'static LifecycleBridge {
        GLOBAL.get_or_init(LifecycleBridge::new)
    }

    /// Creation event: remember the current zone under `id`
    pub fn created(&self, id: AsyncId, kind: ResourceKind, trigger_id: AsyncId) -> ResourceHandle {
        let zone = zone::current();
        let (handle, replaced) =
            self.resources
                .lock()
                .insert(id, zone.clone(), kind.clone(), trigger_id);

        if let Some(previous) = replaced {
            self.fault();
            warn!(
                id,
                previous_kind = %previous.kind,
                previous_zone = %previous.zone,
                "Async resource created over a live id; the older entry is dropped"
            );
        }
        debug!(id, %kind, trigger_id, zone = %zone, generation = handle.generation, "Async resource created");
        handle
    }

    /// Pre-invocation event for a handle from [`LifecycleBridge::created`]
    pub fn before(&self, handle: ResourceHandle) {
        let zone = match self.resources.lock().resolve(handle) {
            Lookup::Live(entry) => Some(entry.zone.clone()),
            Lookup::Stale { live_generation } => {
                warn!(
                    id = handle.id,
                    generation = handle.generation,
                    live_generation,
                    "Invocation of a destroyed async resource whose id was reused"
                );
                None
            }
            Lookup::Missing => {
                warn!(id = handle.id, "Invocation of an unknown async resource");
                None
            }
        };
        self.restore(zone);
    }

    /// Pre-invocation event for hosts that only track plain ids
    pub fn before_id(&self, id: AsyncId) {
        let zone = self.resources.lock().get(id).map(|entry| entry.zone.clone());
        if zone.is_none() {
            warn!(id, "Invocation of an unknown async resource");
        }
        self.restore(zone);
    }

    fn restore(&self, zone: Option<Zone>) {
        let zone = zone.unwrap_or_else(|| {
            self.fault();
            Zone::root()
        });
        zone::set_current(zone);
    }

    /// Destruction event. Returns whether a live entry was removed.
    pub fn destroyed(&self, handle: ResourceHandle) -> bool {
        let removed = self.resources.lock().remove_handle(handle);
        self.log_destroyed(handle.id, removed.is_some())
    }

    pub fn destroyed_id(&self, id: AsyncId) -> bool {
        let removed = self.resources.lock().remove(id);
        self.log_destroyed(id, removed.is_some())
    }

    fn log_destroyed(&self, id: AsyncId, removed: bool) -> bool {
        if removed {
            debug!(id, "Async resource destroyed");
        } else {
            self.fault();
            warn!(id, "Destruction of an async resource that is not registered");
        }
        removed
    }

    /// Zone recorded for a live resource
    pub fn zone_of(&self, id: AsyncId) -> Option<Zone> {
        self.resources.lock().get(id).map(|entry| entry.zone.clone())
    }

    pub fn is_live(&self, handle: ResourceHandle) -> bool {
        matches!(self.resources.lock().resolve(handle), Lookup::Live(_))
    }

    pub fn live_resources(&self) -> usize {
        self.resources.lock().len()
    }

    /// Number of lifecycle events that did not match the bridge's records
    pub fn consistency_faults(&self) -> u64 {
        self.faults.load(Ordering::Relaxed)
    }

    fn fault(&self) {
        self.faults.fetch_add(1, Ordering::Relaxed);
    }
}

impl AsyncHook for LifecycleBridge {
    fn on_resource_created(&self, id: AsyncId, kind: ResourceKind, trigger_id: AsyncId) {
        self.created(id, kind, trigger_id);
    }

    fn on_before_invocation(&self, id: AsyncId) {
        self.before_id(id);
    }

    fn on_resource_destroyed(&self, id: AsyncId) {
        self.destroyed_id(id);
    }

    fn name(&self) -> &str {
        "lifecycle_bridge"
    }
}
