//! Gateway configuration loading.
//!
//! A configuration maps gateway ids to descriptors. Both TOML and JSON are accepted:
//!
//! ```toml
//! [gateways.paypal]
//! class = "Sandbox"
//! purse = "merchant@example.com"
//! secret = "${PAYPAL_SECRET}"
//! ```
//!
//! Secrets should never be written into the file itself. `${VAR}` placeholders in string
//! parameters are replaced from the environment after parsing.

use crate::domain::descriptor::GatewayDescriptor;
use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewaysConfig {
    /// Descriptors keyed by gateway id, in file order.
    #[serde(default)]
    pub gateways: IndexMap<String, GatewayDescriptor>,
}

impl GatewaysConfig {
    /// Reads a config file. `.json` files are parsed as JSON, everything else as TOML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading gateway config");
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&raw)
        } else {
            Self::from_toml_str(&raw)
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.substitute_env();
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(raw)?;
        config.substitute_env();
        Ok(config)
    }

    fn substitute_env(&mut self) {
        for descriptor in self.gateways.values_mut() {
            for value in descriptor.params.values_mut() {
                substitute_value(value);
            }
        }
    }
}

fn substitute_value(value: &mut Value) {
    match value {
        Value::String(s) => *s = substitute_env(s),
        Value::Array(items) => items.iter_mut().for_each(substitute_value),
        Value::Object(map) => map.values_mut().for_each(substitute_value),
        _ => {}
    }
}

/// Replaces `${VAR}` placeholders with environment values.
///
/// Unset variables and unterminated placeholders are left as written.
pub fn substitute_env(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' || chars.peek() != Some(&'{') {
            result.push(ch);
            continue;
        }
        chars.next();
        let mut name = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            name.push(c);
        }
        let resolved = if closed && !name.is_empty() {
            std::env::var(&name).ok()
        } else {
            None
        };
        match resolved {
            Some(val) => result.push_str(&val),
            None => {
                result.push_str("${");
                result.push_str(&name);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}
