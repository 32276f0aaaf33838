//! Zones that follow your code across timers, tasks, I/O completions and
//! promise continuations.
//!
//! ```no_run
//! use asynczone::prelude::*;
//! use std::time::Duration;
//!
//! let zone = Zone::root()
//!     .fork(ZoneSpec::new("request").with_property("user", "ada"))
//!     .unwrap();
//!
//! EventLoop::new().unwrap().run(async move {
//!     zone.run(|| {
//!         set_timeout(Duration::from_millis(5), || {
//!             assert_eq!(current_value("user"), Some("ada".into()));
//!         });
//!     });
//!     assert_eq!(current_value("user"), None);
//! });
//! ```

pub mod runtime;
pub mod types;

pub mod prelude {
    //! Convenient re-exports of commonly used types
    pub use asynczone_core::prelude::*;
    pub use asynczone_macros::Properties;

    pub use crate::runtime::{
        execution_async_id, next_tick, read_metadata, set_immediate, set_interval, set_timeout,
        spawn, spawn_io, spawn_local, AsyncResource, EventEmitter, EventLoop, Promise, Resolver,
        TimerHandle, Zoned, ZonedExt, MIN_INTERVAL,
    };
    pub use crate::types::{PromiseError, PromiseResult, RuntimeError, RuntimeResult};
}

// Re-export main types
pub use prelude::*;
