mod error;
mod properties;
mod result;

pub use error::{Interceptor, Operation, ZoneError};
pub use properties::{is_truthy, IntoProperties, Properties};
pub use result::ZoneResult;
