//! Hierarchical configuration tree with typed accessors
//!
//! Integration readers only see the [`Config`] trait. [`JsonConfig`] backs it
//! with a `serde_json::Value`, which can be built from JSON or TOML text.

use serde_json::Value;
use gemgate_core::error::GemgateError;
use crate::ConfigResult;

/// Read access to a node of a configuration tree
pub trait Config: Sized {
    /// Full dotted path of `key` below this node, used in error messages
    fn full_key(&self, key: &str) -> String;

    /// Read an optional string; absent and `null` values yield `None`
    fn get_optional_string(&self, key: &str) -> ConfigResult<Option<String>>;

    /// Read an optional array of nested configuration objects
    fn get_optional_config_array(&self, key: &str) -> ConfigResult<Option<Vec<Self>>>;

    /// Read a required string
    fn get_string(&self, key: &str) -> ConfigResult<String> {
        self.get_optional_string(key)?
            .ok_or_else(|| GemgateError::ConfigMissing { key: self.full_key(key) })
    }
}

/// Configuration node backed by a JSON value
#[derive(Debug, Clone, PartialEq)]
pub struct JsonConfig {
    /// Value of this node
    data: Value,
    /// Path from the root to this node
    prefix: String,
}

impl JsonConfig {
    /// Wrap a value as the root of a configuration tree
    pub fn new(data: Value) -> Self {
        Self {
            data,
            prefix: String::new(),
        }
    }

    /// Parse JSON text into a configuration tree
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let data = serde_json::from_str(content)
            .map_err(|e| GemgateError::ConfigParse {
                message: format!("JSON syntax error: {}", e),
            })?;
        Ok(Self::new(data))
    }

    /// Parse TOML text into a configuration tree
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| GemgateError::ConfigParse {
                message: format!("TOML syntax error: {}", e),
            })?;
        let data = serde_json::to_value(table)
            .map_err(|e| GemgateError::ConfigParse {
                message: format!("TOML conversion error: {}", e),
            })?;
        Ok(Self::new(data))
    }

    /// Underlying value of this node
    pub fn value(&self) -> &Value {
        &self.data
    }

    /// Walk a dotted key down through nested objects
    fn lookup(&self, key: &str) -> ConfigResult<Option<&Value>> {
        let mut current = &self.data;
        let mut walked = String::new();

        for part in key.split('.') {
            if !walked.is_empty() {
                walked.push('.');
            }
            walked.push_str(part);

            let object = match current {
                Value::Object(object) => object,
                Value::Null => return Ok(None),
                other => {
                    return Err(GemgateError::ConfigType {
                        key: self.full_key(walked.rsplit_once('.').map_or("", |(parent, _)| parent)),
                        expected: "object".to_string(),
                        actual: type_name(other).to_string(),
                    })
                }
            };

            match object.get(part) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }

        Ok(match current {
            Value::Null => None,
            value => Some(value),
        })
    }
}

impl Config for JsonConfig {
    fn full_key(&self, key: &str) -> String {
        match (self.prefix.is_empty(), key.is_empty()) {
            (true, _) => key.to_string(),
            (false, true) => self.prefix.clone(),
            (false, false) => format!("{}.{}", self.prefix, key),
        }
    }

    fn get_optional_string(&self, key: &str) -> ConfigResult<Option<String>> {
        match self.lookup(key)? {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(GemgateError::ConfigType {
                key: self.full_key(key),
                expected: "string".to_string(),
                actual: type_name(other).to_string(),
            }),
        }
    }

    fn get_optional_config_array(&self, key: &str) -> ConfigResult<Option<Vec<Self>>> {
        let items = match self.lookup(key)? {
            None => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(GemgateError::ConfigType {
                    key: self.full_key(key),
                    expected: "object-array".to_string(),
                    actual: type_name(other).to_string(),
                })
            }
        };

        let array_key = self.full_key(key);
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let prefix = format!("{}[{}]", array_key, index);
                match item {
                    Value::Object(_) => Ok(JsonConfig {
                        data: item.clone(),
                        prefix,
                    }),
                    other => Err(GemgateError::ConfigType {
                        key: prefix,
                        expected: "object".to_string(),
                        actual: type_name(other).to_string(),
                    }),
                }
            })
            .collect::<ConfigResult<Vec<_>>>()
            .map(Some)
    }
}

impl From<Value> for JsonConfig {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}

/// Name of a JSON value's type as shown in error messages
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests;
