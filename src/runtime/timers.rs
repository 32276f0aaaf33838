//! Callback-style scheduling on the current `LocalSet`.
//!
//! Each helper creates its resource synchronously, inside the caller's zone,
//! so the callback later runs in that zone no matter what is current when the
//! timer fires.

use super::task::spawn_local_as;
use asynczone_core::ResourceKind;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

#[derive(Debug, Default)]
struct TimerState {
    cleared: AtomicBool,
    abort: OnceLock<AbortHandle>,
}

/// Handle to a scheduled callback
#[derive(Debug, Clone, Default)]
pub struct TimerHandle {
    state: Arc<TimerState>,
}

impl TimerHandle {
    fn attach(&self, abort: AbortHandle) {
        // a callback can only be cleared before attach from inside itself,
        // and then the task stops on its own
        let _ = self.state.abort.set(abort);
    }

    /// Cancel the callback. Safe to call from inside it and more than once.
    pub fn clear(&self) {
        self.state.cleared.store(true, Ordering::SeqCst);
        if let Some(abort) = self.state.abort.get() {
            abort.abort();
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.state.cleared.load(Ordering::SeqCst)
    }
}

/// Run `callback` once after `delay`
pub fn set_timeout<F>(delay: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() + 'static,
{
    let handle = TimerHandle::default();
    let task = spawn_local_as(ResourceKind::Timeout, async move {
        tokio::time::sleep(delay).await;
        callback();
    });
    handle.attach(task.abort_handle());
    handle
}

/// Shortest interval period; shorter ones, including zero, are raised to it
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

// Stands in for deadlines too far away to represent
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Run `callback` every `period`, first after one period, until cleared.
///
/// Every firing restores the zone captured here independently. A `period`
/// below [`MIN_INTERVAL`] is clamped to it.
pub fn set_interval<F>(period: Duration, mut callback: F) -> TimerHandle
where
    F: FnMut(&TimerHandle) + 'static,
{
    let period = period.max(MIN_INTERVAL);
    let handle = TimerHandle::default();
    let timer = handle.clone();
    let task = spawn_local_as(ResourceKind::Interval, async move {
        let now = Instant::now();
        let start = now
            .checked_add(period)
            .unwrap_or_else(|| now + FAR_FUTURE);
        let mut ticker = interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        while !timer.is_cleared() {
            ticker.tick().await;
            if timer.is_cleared() {
                break;
            }
            callback(&timer);
        }
    });
    handle.attach(task.abort_handle());
    handle
}

/// Run `callback` on a later turn of the loop
pub fn set_immediate<F>(callback: F) -> TimerHandle
where
    F: FnOnce() + 'static,
{
    let handle = TimerHandle::default();
    let task = spawn_local_as(ResourceKind::Immediate, async move {
        tokio::task::yield_now().await;
        callback();
    });
    handle.attach(task.abort_handle());
    handle
}

/// Run `callback` as soon as the current turn of the loop yields
pub fn next_tick<F>(callback: F)
where
    F: FnOnce() + 'static,
{
    let _ = spawn_local_as(ResourceKind::Microtask, async move { callback() });
}
