//! Implicit context propagation for event-loop runtimes.
//!
//! A [`Zone`] is an immutable node in a tree of key/value environments. The
//! current zone follows code through [`Zone::run`] and [`Zone::wrap`], and the
//! [`LifecycleBridge`] carries it into deferred work: every async resource is
//! stamped with the zone current at its creation, and that zone is restored
//! right before each of its invocations.

#![allow(unused_extern_crates)]
extern crate self as asynczone_core;

pub mod bridge;
pub mod types;
pub mod zone;

pub mod prelude {
    //! Convenient re-exports of commonly used types
    pub use crate::bridge::{
        next_async_id, register_hook, AsyncHook, AsyncId, LifecycleBridge, ResourceHandle,
        ResourceKind, TOP_LEVEL_ASYNC_ID,
    };
    pub use crate::types::{
        is_truthy, Interceptor, IntoProperties, Operation, Properties, ZoneError, ZoneResult,
    };
    pub use crate::zone::{
        current, current_value, set_current, Callback, CurrentGuard, Zone, ZoneSpec,
        ROOT_ZONE_NAME,
    };
}

// Re-export main types
pub use bridge::{Lookup, ResourceEntry, ResourceMap};
pub use prelude::*;
