//! Host adapter for tokio.
//!
//! tokio has no public lifecycle hooks, so they are derived here: wrapping a
//! future is the creation event, each poll is an invocation and dropping the
//! future is the destruction. Everything spawned through this module
//! therefore runs in the zone that was current when it was scheduled.

mod emitter;
mod event_loop;
mod future;
mod io;
mod promise;
mod resource;
mod task;
mod timers;

pub use emitter::EventEmitter;
pub use event_loop::EventLoop;
pub use future::{Zoned, ZonedExt};
pub use io::{read_metadata, spawn_io};
pub use promise::{Promise, Resolver};
pub use resource::{execution_async_id, AsyncResource, InvocationScope};
pub use task::{spawn, spawn_local};
pub use timers::{
    next_tick, set_immediate, set_interval, set_timeout, TimerHandle, MIN_INTERVAL,
};
