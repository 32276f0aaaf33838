use asynczone_core::bridge::{self, LifecycleBridge};
use asynczone_core::{next_async_id, AsyncId, CurrentGuard, ResourceHandle, ResourceKind, Zone};
use asynczone_core::TOP_LEVEL_ASYNC_ID;
use std::cell::Cell;

thread_local! {
    static EXECUTION_ID: Cell<AsyncId> = const { Cell::new(TOP_LEVEL_ASYNC_ID) };
}

/// Id of the async resource whose callback is running on this thread, or
/// [`TOP_LEVEL_ASYNC_ID`] outside of any.
pub fn execution_async_id() -> AsyncId {
    EXECUTION_ID.with(Cell::get)
}

/// One unit of deferred work as seen by the lifecycle bridge.
///
/// Creating it is the creation event and captures the current zone; every
/// [`AsyncResource::enter`] is an invocation; dropping it is the destruction
/// event. Registered hooks observe the same three events.
#[derive(Debug)]
pub struct AsyncResource {
    handle: ResourceHandle,
    kind: ResourceKind,
    trigger_id: AsyncId,
}

impl AsyncResource {
    pub fn new(kind: ResourceKind) -> Self {
        let id = next_async_id();
        let trigger_id = execution_async_id();
        let handle = LifecycleBridge::global().created(id, kind.clone(), trigger_id);
        bridge::notify_created(id, &kind, trigger_id);
        Self {
            handle,
            kind,
            trigger_id,
        }
    }

    pub fn async_id(&self) -> AsyncId {
        self.handle.id
    }

    /// Id of the resource that was executing when this one was created
    pub fn trigger_async_id(&self) -> AsyncId {
        self.trigger_id
    }

    pub fn handle(&self) -> ResourceHandle {
        self.handle
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    /// Zone captured at creation
    pub fn zone(&self) -> Option<Zone> {
        LifecycleBridge::global().zone_of(self.handle.id)
    }

    /// Begin an invocation: restore the creator's zone until the scope drops.
    ///
    /// Dropping the scope returns to whatever zone the host was in before,
    /// which is the host's own next scheduling point.
    pub fn enter(&self) -> InvocationScope {
        let restore = CurrentGuard::save();
        let previous_id = EXECUTION_ID.with(|id| id.replace(self.handle.id));
        LifecycleBridge::global().before(self.handle);
        bridge::notify_before(self.handle.id);
        InvocationScope {
            previous_id,
            _restore: restore,
        }
    }

    /// Run `f` as one invocation of this resource
    pub fn run_in_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        let _scope = self.enter();
        f()
    }
}

impl Drop for AsyncResource {
    fn drop(&mut self) {
        LifecycleBridge::global().destroyed(self.handle);
        bridge::notify_destroyed(self.handle.id);
    }
}

/// An invocation in progress; see [`AsyncResource::enter`]
#[must_use = "the invocation ends as soon as the scope is dropped"]
#[derive(Debug)]
pub struct InvocationScope {
    previous_id: AsyncId,
    _restore: CurrentGuard,
}

impl Drop for InvocationScope {
    fn drop(&mut self) {
        EXECUTION_ID.with(|id| id.set(self.previous_id));
    }
}
