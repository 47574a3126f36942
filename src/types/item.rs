use super::AttributeValue;

use aws_sdk_dynamodb::types;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One record from the dump's `Items` array. Any JSON object is accepted
/// as-is; no schema is enforced and key order is kept as it appears in
/// the file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Item(Map<String, Value>);

impl Item {
    /// Compact JSON form of the item, with no whitespace between tokens.
    pub fn payload(&self) -> String {
        serde_json::to_string(&self.0).expect("JSON objects always serialize")
    }

    /// The compact form with every literal double quote escaped, so the
    /// result can sit inside a double-quoted shell argument.
    pub fn escaped_payload(&self) -> String {
        self.payload().replace('"', "\\\"")
    }

    /// Interprets the item as DynamoDB-JSON and converts each attribute
    /// into the SDK representation.
    pub fn attributes(&self) -> Result<HashMap<String, types::AttributeValue>, serde_json::Error> {
        let parsed: HashMap<String, AttributeValue> =
            serde_json::from_value(Value::Object(self.0.clone()))?;

        Ok(parsed
            .into_iter()
            .map(|(key, value)| (key, types::AttributeValue::from(value)))
            .collect())
    }
}

#[cfg(test)]
impl Item {
    pub fn new(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => panic!("An item requires a JSON object"),
        }
    }
}
