//! Operations from richer zone APIs that are recognised only to be refused.
//!
//! Each one fails immediately so callers never believe task scheduling,
//! cancellation or error interception is active.

use super::{Callback, Zone};
use crate::types::{Operation, ZoneError, ZoneResult};
use tracing::warn;

fn unsupported<T>(zone: &Zone, operation: Operation) -> ZoneResult<T> {
    warn!(zone = %zone, %operation, "Unsupported zone operation invoked");
    Err(ZoneError::UnsupportedOperation(operation))
}

impl Zone {
    pub fn run_guarded<R>(&self, _f: impl FnOnce() -> R) -> ZoneResult<R> {
        unsupported(self, Operation::RunGuarded)
    }

    pub fn run_task(&self, _source: &str) -> ZoneResult<()> {
        unsupported(self, Operation::RunTask)
    }

    pub fn schedule_micro_task(&self, _source: &str, _callback: Callback<()>) -> ZoneResult<()> {
        unsupported(self, Operation::ScheduleMicroTask)
    }

    pub fn schedule_macro_task(&self, _source: &str, _callback: Callback<()>) -> ZoneResult<()> {
        unsupported(self, Operation::ScheduleMacroTask)
    }

    pub fn schedule_event_task(&self, _source: &str, _callback: Callback<()>) -> ZoneResult<()> {
        unsupported(self, Operation::ScheduleEventTask)
    }

    pub fn cancel_task(&self, _source: &str) -> ZoneResult<()> {
        unsupported(self, Operation::CancelTask)
    }
}
