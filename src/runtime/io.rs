use super::task::spawn_local_as;
use crate::types::RuntimeResult;
use asynczone_core::{ResourceKind, Zone};
use std::fs::Metadata;
use std::io;
use std::path::Path;
use tokio::task::JoinHandle;

/// Stat `path` and hand the result to `callback` in the requester's zone
pub fn read_metadata<P, F>(path: P, callback: F) -> JoinHandle<()>
where
    P: AsRef<Path>,
    F: FnOnce(io::Result<Metadata>) + 'static,
{
    let path = path.as_ref().to_path_buf();
    spawn_local_as(ResourceKind::Io, async move {
        callback(tokio::fs::metadata(path).await);
    })
}

/// Run blocking `work` on tokio's blocking pool and deliver its result to
/// `callback`.
///
/// Both the work and the completion callback run in the zone that was
/// current when this was called.
pub fn spawn_io<T, W, F>(work: W, callback: F) -> JoinHandle<()>
where
    W: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
    F: FnOnce(RuntimeResult<T>) + 'static,
{
    let zone = Zone::current();
    spawn_local_as(ResourceKind::Io, async move {
        let result = tokio::task::spawn_blocking(move || zone.run(work)).await;
        callback(result.map_err(Into::into));
    })
}
