use super::Zoned;
use crate::types::RuntimeResult;
use asynczone_core::ResourceKind;
use std::future::Future;
use tokio::runtime::{Builder, Runtime};
use tokio::task::LocalSet;
use tracing::debug;

/// A single-threaded event loop: a current-thread tokio runtime driving a
/// `LocalSet`, so the timer, I/O and promise helpers can be used.
#[derive(Debug)]
pub struct EventLoop {
    runtime: Runtime,
    local: LocalSet,
}

impl EventLoop {
    pub fn new() -> RuntimeResult<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            runtime,
            local: LocalSet::new(),
        })
    }

    /// Run `main` to completion, then keep going until every callback it
    /// scheduled has fired.
    ///
    /// `main` is itself an async resource created in the zone current on the
    /// calling thread, normally the root.
    pub fn run<F: Future>(self, main: F) -> F::Output {
        let EventLoop { runtime, local } = self;
        let output = local.block_on(&runtime, Zoned::new(main, ResourceKind::Main));
        debug!("Main future finished, draining scheduled callbacks");
        runtime.block_on(local);
        output
    }
}
