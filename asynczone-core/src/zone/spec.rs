use crate::types::{is_truthy, Interceptor, IntoProperties, Properties, ZoneError, ZoneResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Configuration for a new zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpec {
    /// Diagnostic label, never used for lookup
    pub name: String,
    /// Bindings visible through this zone and its descendants. A falsy JSON
    /// value (`null`, `false`, `0`, `""`) reads as no bindings.
    #[serde(default, deserialize_with = "properties_or_empty")]
    pub properties: Properties,
    /// Remaining keys, where interception hooks show up
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl ZoneSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Properties::new(),
            options: Map::new(),
        }
    }

    /// Parse a spec from its JSON form
    pub fn from_json(json: &str) -> ZoneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_properties(mut self, properties: impl IntoProperties) -> Self {
        self.properties.extend(properties.into_properties());
        self
    }

    /// Request an interception hook. The spec will then fail validation.
    pub fn with_interceptor(mut self, hook: Interceptor) -> Self {
        self.options.insert(hook.key().to_string(), Value::Bool(true));
        self
    }

    /// Hooks requested with a truthy value
    pub fn requested_interceptors(&self) -> Vec<Interceptor> {
        Interceptor::ALL
            .into_iter()
            .filter(|hook| self.options.get(hook.key()).is_some_and(is_truthy))
            .collect()
    }

    /// Reject the spec if it asks for any interception hook
    pub fn validate(&self) -> ZoneResult<()> {
        match self.requested_interceptors().first() {
            Some(hook) => Err(ZoneError::UnsupportedInterceptor(*hook)),
            None => Ok(()),
        }
    }
}

fn properties_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Properties, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map.into_properties()),
        value if !is_truthy(&value) => Ok(Properties::new()),
        other => Err(D::Error::custom(format!(
            "properties must be an object, got {}",
            other
        ))),
    }
}
