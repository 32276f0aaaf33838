mod core;
mod hook;
mod map;
mod registry;

pub use self::core::LifecycleBridge;
pub use hook::{next_async_id, AsyncHook, AsyncId, ResourceKind, TOP_LEVEL_ASYNC_ID};
pub use map::{Lookup, ResourceEntry, ResourceHandle, ResourceMap};
pub use registry::{notify_before, notify_created, notify_destroyed, register_hook, registered_hooks};
