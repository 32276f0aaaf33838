use super::task::spawn_local_as;
use crate::types::{PromiseError, PromiseResult};
use asynczone_core::ResourceKind;
use std::fmt::Debug;
use tokio::sync::oneshot;

/// Settles a [`Promise`]. Dropping it unsettled abandons the promise.
#[derive(Debug)]
pub struct Resolver<T, E = ()> {
    sender: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Resolver<T, E> {
    /// Fulfil the promise. Returns false if nobody is listening any more.
    pub fn resolve(self, value: T) -> bool {
        self.sender.send(Ok(value)).is_ok()
    }

    /// Reject the promise. Returns false if nobody is listening any more.
    pub fn reject(self, error: E) -> bool {
        self.sender.send(Err(error)).is_ok()
    }
}

/// A one-shot value with callback continuations.
///
/// Each continuation is an async resource created when [`Promise::then`] or
/// [`Promise::catch`] is called, so it runs in the zone current at that call,
/// not in the zone of whoever settles the promise.
#[derive(Debug)]
pub struct Promise<T, E = ()> {
    receiver: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> Promise<T, E>
where
    T: 'static,
    E: Debug + 'static,
{
    /// An unsettled promise and the resolver that settles it
    pub fn pending() -> (Self, Resolver<T, E>) {
        let (sender, receiver) = oneshot::channel();
        (Self { receiver }, Resolver { sender })
    }

    /// Run `executor` synchronously with the promise's resolver
    pub fn new(executor: impl FnOnce(Resolver<T, E>)) -> Self {
        let (promise, resolver) = Self::pending();
        executor(resolver);
        promise
    }

    pub fn resolved(value: T) -> Self {
        Self::new(|resolver| {
            resolver.resolve(value);
        })
    }

    pub fn rejected(error: E) -> Self {
        Self::new(|resolver| {
            resolver.reject(error);
        })
    }

    /// Map the fulfilled value; rejections pass through untouched
    pub fn then<U, F>(self, on_fulfilled: F) -> Promise<U, E>
    where
        U: 'static,
        F: FnOnce(T) -> U + 'static,
    {
        self.chain(move |outcome, resolver| match outcome {
            Ok(value) => resolver.resolve(on_fulfilled(value)),
            Err(error) => resolver.reject(error),
        })
    }

    /// Recover from a rejection; fulfilled values pass through untouched
    pub fn catch<F>(self, on_rejected: F) -> Promise<T, E>
    where
        F: FnOnce(E) -> T + 'static,
    {
        self.chain(move |outcome, resolver| match outcome {
            Ok(value) => resolver.resolve(value),
            Err(error) => resolver.resolve(on_rejected(error)),
        })
    }

    fn chain<U, F>(self, continuation: F) -> Promise<U, E>
    where
        U: 'static,
        F: FnOnce(Result<T, E>, Resolver<U, E>) -> bool + 'static,
    {
        let (next, resolver) = Promise::pending();
        let _ = spawn_local_as(ResourceKind::Promise, async move {
            // an abandoned promise abandons everything chained to it
            if let Ok(outcome) = self.receiver.await {
                continuation(outcome, resolver);
            }
        });
        next
    }

    /// Wait for the promise to settle
    pub async fn settle(self) -> PromiseResult<T, E> {
        match self.receiver.await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(error)) => Err(PromiseError::Rejected(error)),
            Err(_) => Err(PromiseError::Abandoned),
        }
    }
}
