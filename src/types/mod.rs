mod error;
mod result;

pub use error::{PromiseError, RuntimeError};
pub use result::{PromiseResult, RuntimeResult};
