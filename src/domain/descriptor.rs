use crate::error::ConfigurationError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Construction parameters of a gateway, keyed by parameter name.
pub type GatewayParams = Map<String, Value>;

/// Configuration record describing how to build one gateway.
///
/// The type tag is read from `class`; every other key, `gateway` included, is kept
/// verbatim in `params` and handed to the constructor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GatewayDescriptor {
    /// Type tag selecting the constructor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Registry id. Always replaced with the registry key before construction, so a
    /// configured id that is not a string is dropped instead of rejected.
    #[serde(
        default,
        deserialize_with = "string_or_discard",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(flatten)]
    pub params: GatewayParams,
}

impl GatewayDescriptor {
    /// Creates a descriptor for the given type tag with no parameters.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            ..Self::default()
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Returns the descriptor with its id set to `id`, overwriting any previous one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The tag used to pick a constructor.
    ///
    /// `class` wins. Without it, a string `gateway` parameter names the type, and
    /// failing that the id does, so an entry keyed `PayPal` with neither builds the
    /// `PayPal` type.
    pub fn type_tag(&self) -> Option<&str> {
        self.class
            .as_deref()
            .or_else(|| self.params.get("gateway").and_then(Value::as_str))
            .or(self.id.as_deref())
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Returns a required string parameter.
    pub fn str_param(&self, key: &str) -> Result<&str, ConfigurationError> {
        match self.params.get(key) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(ConfigurationError::InvalidParameter {
                id: self.id_or_default().to_string(),
                param: key.to_string(),
                reason: format!("expected a string, found {other}"),
            }),
            None => Err(ConfigurationError::MissingParameter {
                id: self.id_or_default().to_string(),
                param: key.to_string(),
            }),
        }
    }

    /// Returns an optional string parameter; present non-strings are rejected.
    pub fn opt_str_param(&self, key: &str) -> Result<Option<&str>, ConfigurationError> {
        if self.params.contains_key(key) {
            self.str_param(key).map(Some)
        } else {
            Ok(None)
        }
    }

    fn id_or_default(&self) -> &str {
        self.id.as_deref().unwrap_or("<unnamed>")
    }
}

fn string_or_discard<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}
