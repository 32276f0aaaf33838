//! The per-thread "current zone" slot.
//!
//! On a single-threaded event loop this is the one process-wide pointer every
//! callback reads. Multi-threaded hosts get one slot per worker thread, and
//! the lifecycle bridge re-establishes the right zone before each poll.

use super::Zone;
use serde_json::Value;
use std::cell::RefCell;

thread_local! {
    static CURRENT: RefCell<Option<Zone>> = const { RefCell::new(None) };
}

/// The zone active for code running on this thread right now.
///
/// Never empty: a thread that has not entered any zone sees the root.
pub fn current() -> Zone {
    CURRENT.with(|slot| slot.borrow().clone()).unwrap_or_else(Zone::root)
}

/// Replace the current zone, returning the one it displaced
pub fn set_current(zone: Zone) -> Zone {
    CURRENT
        .with(|slot| slot.borrow_mut().replace(zone))
        .unwrap_or_else(Zone::root)
}

/// Look `key` up through the current zone
pub fn current_value(key: &str) -> Option<Value> {
    current().get(key).cloned()
}

/// Restores the saved zone when dropped.
///
/// Obtained from [`Zone::enter`] or [`CurrentGuard::save`]; guards must be
/// dropped in reverse order of creation, and must not be held across an
/// `.await` (see [`Zone::enter`]).
#[must_use = "the previous zone is restored as soon as the guard is dropped"]
pub struct CurrentGuard {
    previous: Option<Zone>,
}

impl CurrentGuard {
    /// Remember the current zone without changing it
    pub fn save() -> Self {
        Self {
            previous: Some(current()),
        }
    }

    pub(crate) fn enter(zone: &Zone) -> Self {
        Self {
            previous: Some(set_current(zone.clone())),
        }
    }

    /// The zone that will be restored
    pub fn previous(&self) -> Option<&Zone> {
        self.previous.as_ref()
    }
}

impl Drop for CurrentGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            set_current(previous);
        }
    }
}

impl std::fmt::Debug for CurrentGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentGuard")
            .field("previous", &self.previous)
            .finish()
    }
}
