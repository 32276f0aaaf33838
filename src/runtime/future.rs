use super::AsyncResource;
use asynczone_core::{AsyncId, ResourceKind, Zone};
use futures::Stream;
use std::fmt::{Debug, Formatter, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A future or stream tracked as an async resource.
///
/// Wrapping is the creation event, so the zone current at that moment is
/// the one every later poll runs in. Dropping the wrapper destroys the
/// resource.
pub struct Zoned<T> {
    inner: Pin<Box<T>>,
    resource: AsyncResource,
}

impl<T> Zoned<T> {
    pub fn new(inner: T, kind: ResourceKind) -> Self {
        Self {
            inner: Box::pin(inner),
            resource: AsyncResource::new(kind),
        }
    }

    pub fn async_id(&self) -> AsyncId {
        self.resource.async_id()
    }

    pub fn resource(&self) -> &AsyncResource {
        &self.resource
    }

    /// Zone every poll of this wrapper runs in
    pub fn zone(&self) -> Option<Zone> {
        self.resource.zone()
    }
}

impl<F: Future> Future for Zoned<F> {
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let _scope = this.resource.enter();
        this.inner.as_mut().poll(cx)
    }
}

impl<S: Stream> Stream for Zoned<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let _scope = this.resource.enter();
        this.inner.as_mut().poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> Debug for Zoned<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Zoned")
            .field("resource", &self.resource)
            .finish_non_exhaustive()
    }
}

/// Attach futures and streams to a zone
pub trait ZonedExt: Sized {
    /// Track `self` as a resource created in the current zone
    fn in_current_zone(self) -> Zoned<Self> {
        Zoned::new(self, ResourceKind::Task)
    }

    /// Track `self` as a resource created in `zone`
    fn in_zone(self, zone: &Zone) -> Zoned<Self> {
        zone.run(|| self.in_current_zone())
    }
}

impl<T> ZonedExt for T {}
