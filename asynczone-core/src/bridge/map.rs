use super::{AsyncId, ResourceKind};
use crate::zone::Zone;
use std::collections::HashMap;

/// A resource id tagged with the generation it was created under.
///
/// Ids may be reused once a resource is destroyed; the generation tells a
/// late event for the old resource apart from the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceHandle {
    pub id: AsyncId,
    pub generation: u64,
}

/// What the bridge remembers about a live resource
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pub generation: u64,
    /// Zone that was current when the resource was created
    pub zone: Zone,
    pub kind: ResourceKind,
    pub trigger_id: AsyncId,
}

#[derive(Debug)]
pub enum Lookup<'a> {
    Live(&'a ResourceEntry),
    /// The id is live again under a newer generation
    Stale { live_generation: u64 },
    Missing,
}

/// Resource id to creator zone
#[derive(Debug, Default)]
pub struct ResourceMap {
    entries: HashMap<AsyncId, ResourceEntry>,
    next_generation: u64,
}

impl ResourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new resource, returning its handle and whatever entry was
    /// still registered under the same id
    pub fn insert(
        &mut self,
        id: AsyncId,
        zone: Zone,
        kind: ResourceKind,
        trigger_id: AsyncId,
    ) -> (ResourceHandle, Option<ResourceEntry>) {
        self.next_generation += 1;
        let generation = self.next_generation;
        let replaced = self.entries.insert(
            id,
            ResourceEntry {
                generation,
                zone,
                kind,
                trigger_id,
            },
        );
        (ResourceHandle { id, generation }, replaced)
    }

    pub fn get(&self, id: AsyncId) -> Option<&ResourceEntry> {
        self.entries.get(&id)
    }

    pub fn resolve(&self, handle: ResourceHandle) -> Lookup<'_> {
        match self.entries.get(&handle.id) {
            Some(entry) if entry.generation == handle.generation => Lookup::Live(entry),
            Some(entry) => Lookup::Stale {
                live_generation: entry.generation,
            },
            None => Lookup::Missing,
        }
    }

    pub fn remove(&mut self, id: AsyncId) -> Option<ResourceEntry> {
        self.entries.remove(&id)
    }

    /// Remove the entry only if it still belongs to `handle`
    pub fn remove_handle(&mut self, handle: ResourceHandle) -> Option<ResourceEntry> {
        match self.resolve(handle) {
            Lookup::Live(_) => self.entries.remove(&handle.id),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
