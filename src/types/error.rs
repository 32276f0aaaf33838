use std::fmt::Debug;
use thiserror::Error;

/// Error type for the tokio host adapter
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Event loop: {0}")]
    EventLoop(#[from] std::io::Error),

    #[error("Background work: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Why a promise did not produce a value
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PromiseError<E: Debug> {
    #[error("Promise rejected: {0:?}")]
    Rejected(E),

    #[error("Promise abandoned before it settled")]
    Abandoned,
}
