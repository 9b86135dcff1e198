//! Validator records and the reference schema they are checked against.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::RegistryError;

/// One validator's metadata, kept as the raw field map so that unknown
/// fields survive validation and aggregation untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorRecord {
    fields: Map<String, Value>,
}

impl ValidatorRecord {
    /// Parses a record; anything other than a JSON object is rejected.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let fields: Map<String, Value> = serde_json::from_str(raw)?;
        Ok(Self { fields })
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn secp(&self) -> Option<&str> {
        self.str_field("secp")
    }

    pub fn bls(&self) -> Option<&str> {
        self.str_field("bls")
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn logo(&self) -> Option<&str> {
        self.str_field("logo")
    }

    /// On-chain identifier, if it is a valid `uint64`.
    pub fn validator_id(&self) -> Option<u64> {
        self.fields.get("id").and_then(Value::as_u64)
    }

    /// Human-readable rendering of a field for report headers.
    pub fn display_field(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "<missing>".to_string(),
        }
    }
}

/// Type name of a JSON value, as used in schema reports.
///
/// Integers and floats are distinct types. An integer literal outside the
/// `i64`/`u64` range is parsed as `f64` and therefore reported as `float`.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The example record every candidate is compared against.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSchema {
    fields: Map<String, Value>,
}

impl ReferenceSchema {
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path).map_err(|e| RegistryError::Schema {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let fields: Map<String, Value> =
            serde_json::from_str(&raw).map_err(|e| RegistryError::Schema {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        tracing::debug!("loaded reference schema with {} fields", fields.len());
        Ok(Self { fields })
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
