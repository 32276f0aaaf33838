use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::sync::atomic::{AtomicU64, Ordering};

/// Host-assigned identifier of an async resource.
///
/// Unique while the resource is alive; hosts may reuse it afterwards.
pub type AsyncId = u64;

/// Id reported for work that runs outside any async resource
pub const TOP_LEVEL_ASYNC_ID: AsyncId = 0;

static NEXT_ASYNC_ID: AtomicU64 = AtomicU64::new(TOP_LEVEL_ASYNC_ID + 1);

/// Allocate a fresh id for hosts that have no numbering of their own
pub fn next_async_id() -> AsyncId {
    NEXT_ASYNC_ID.fetch_add(1, Ordering::Relaxed)
}

/// What kind of deferred work a resource represents. Diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Main,
    Task,
    Timeout,
    Interval,
    Immediate,
    Microtask,
    Promise,
    Io,
    Stream,
    Other(String),
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ResourceKind::Other(kind) => f.write_str(kind),
            kind => write!(f, "{:?}", kind),
        }
    }
}

/// The lifecycle callbacks a host runtime must deliver.
///
/// `on_resource_created` fires synchronously inside whatever code scheduled
/// the resource, `on_before_invocation` right before every firing of its
/// callback, and `on_resource_destroyed` exactly once when the host is done
/// with it.
pub trait AsyncHook: Send + Sync {
    fn on_resource_created(&self, id: AsyncId, kind: ResourceKind, trigger_id: AsyncId);

    fn on_before_invocation(&self, id: AsyncId);

    fn on_resource_destroyed(&self, id: AsyncId);

    /// Name used in diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
