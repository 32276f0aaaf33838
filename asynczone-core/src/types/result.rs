use crate::ZoneError;
use std::result::Result;

pub type ZoneResult<T> = Result<T, ZoneError>;
