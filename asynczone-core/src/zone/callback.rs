use super::Zone;
use std::fmt::{Debug, Formatter, Result};
use std::sync::Arc;

/// A shareable, type-erased callback.
///
/// Arguments travel as a single value `A` (use a tuple for several); any
/// receiver is whatever the closure captured. A callback produced by
/// [`Zone::wrap`] remembers the zone it is bound to, which is what makes
/// wrapping idempotent.
pub struct Callback<A, R = ()> {
    f: Arc<dyn Fn(A) -> R + Send + Sync>,
    zone: Option<Zone>,
}

impl<A, R> Callback<A, R> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(f),
            zone: None,
        }
    }

    pub(crate) fn bound<F>(zone: Zone, f: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(f),
            zone: Some(zone),
        }
    }

    pub fn call(&self, args: A) -> R {
        (self.f)(args)
    }

    /// Whether this callback came out of [`Zone::wrap`]
    pub fn is_wrapped(&self) -> bool {
        self.zone.is_some()
    }

    /// The zone a wrapped callback restores
    pub fn zone(&self) -> Option<&Zone> {
        self.zone.as_ref()
    }

    /// Whether both handles share the same underlying function
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.f, &b.f)
    }
}

// Derived Clone would require A: Clone and R: Clone
impl<A, R> Clone for Callback<A, R> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            zone: self.zone.clone(),
        }
    }
}

impl<A, R> Debug for Callback<A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Callback")
            .field("zone", &self.zone)
            .finish_non_exhaustive()
    }
}
