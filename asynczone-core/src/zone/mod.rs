mod callback;
mod core;
mod current;
mod spec;
mod unsupported;

pub use callback::Callback;
pub use self::core::{Zone, ROOT_ZONE_NAME};
pub use current::{current, current_value, set_current, CurrentGuard};
pub use spec::ZoneSpec;
