use super::{PromiseError, RuntimeError};
use std::result::Result;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

pub type PromiseResult<T, E> = Result<T, PromiseError<E>>;
