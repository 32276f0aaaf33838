use serde_json::{Map, Value};
use std::collections::HashMap;

/// Key/value bindings carried by a single zone
pub type Properties = HashMap<String, Value>;

/// Conversion into a zone's property map.
///
/// Implemented for the common map types and generated for structs by
/// `#[derive(Properties)]`.
pub trait IntoProperties {
    fn into_properties(self) -> Properties;
}

impl IntoProperties for Properties {
    fn into_properties(self) -> Properties {
        self
    }
}

impl IntoProperties for Map<String, Value> {
    fn into_properties(self) -> Properties {
        self.into_iter().collect()
    }
}

impl<K, V> IntoProperties for Vec<(K, V)>
where
    K: Into<String>,
    V: Into<Value>,
{
    fn into_properties(self) -> Properties {
        self.into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect()
    }
}

/// Whether a bound value counts as present during inherited lookup.
///
/// `null`, `false`, numeric zero and the empty string are falsy; arrays and
/// objects are truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
