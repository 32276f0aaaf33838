//! Additional lifecycle observers.
//!
//! The [`LifecycleBridge`](super::LifecycleBridge) is always wired in by the
//! host adapter. Other observers (profilers, leak checkers, tests) register
//! here once and stay registered for the life of the process.

use super::{AsyncHook, AsyncId, ResourceKind};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

static HOOKS: RwLock<Vec<Arc<dyn AsyncHook>>> = parking_lot::const_rwlock(Vec::new());

/// Subscribe `hook` to every lifecycle event from now on.
///
/// Hooks cannot be unregistered. A hook registered while an event is being
/// delivered sees events from the next one on.
pub fn register_hook(hook: Arc<dyn AsyncHook>) {
    debug!(hook = hook.name(), "Registering async hook");
    HOOKS.write().push(hook);
}

pub fn registered_hooks() -> usize {
    HOOKS.read().len()
}

// Callbacks run on a snapshot so hooks may create resources or register
// hooks without holding the lock.
fn snapshot() -> Vec<Arc<dyn AsyncHook>> {
    HOOKS.read().clone()
}

pub fn notify_created(id: AsyncId, kind: &ResourceKind, trigger_id: AsyncId) {
    for hook in snapshot() {
        hook.on_resource_created(id, kind.clone(), trigger_id);
    }
}

pub fn notify_before(id: AsyncId) {
    for hook in snapshot() {
        hook.on_before_invocation(id);
    }
}

pub fn notify_destroyed(id: AsyncId) {
    for hook in snapshot() {
        hook.on_resource_destroyed(id);
    }
}
