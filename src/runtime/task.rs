use super::Zoned;
use asynczone_core::ResourceKind;
use std::future::Future;
use tokio::task::JoinHandle;

/// Spawn `future` on the tokio runtime; every poll runs in the zone current
/// at the call
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(Zoned::new(future, ResourceKind::Task))
}

/// [`spawn`] for `!Send` futures; must be called inside a `LocalSet`
pub fn spawn_local<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + 'static,
    F::Output: 'static,
{
    spawn_local_as(ResourceKind::Task, future)
}

pub(crate) fn spawn_local_as<F>(kind: ResourceKind, future: F) -> JoinHandle<F::Output>
where
    F: Future + 'static,
    F::Output: 'static,
{
    tokio::task::spawn_local(Zoned::new(future, kind))
}
