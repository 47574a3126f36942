use aws_sdk_dynamodb::{primitives::Blob, types};
use serde::Deserialize;
use std::collections::HashMap;

/// One attribute of an exported item, in DynamoDB-JSON form
/// (`{"S": "..."}`, `{"N": "..."}`, ...). An item whose attributes do not
/// deserialize into this shape cannot be put through the SDK client.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeValue {
    B(String),
    Bool(bool),
    Bs(Vec<String>),
    L(Vec<AttributeValue>),
    M(HashMap<String, AttributeValue>),
    N(String),
    Ns(Vec<String>),
    Null(bool),
    S(String),
    Ss(Vec<String>),
}

impl From<AttributeValue> for types::AttributeValue {
    fn from(value: AttributeValue) -> types::AttributeValue {
        match value {
            AttributeValue::B(v) => types::AttributeValue::B(into_blob(v)),
            AttributeValue::Bool(v) => types::AttributeValue::Bool(v),
            AttributeValue::Bs(v) => {
                types::AttributeValue::Bs(v.into_iter().map(into_blob).collect())
            }
            AttributeValue::L(v) => {
                types::AttributeValue::L(v.into_iter().map(types::AttributeValue::from).collect())
            }
            AttributeValue::M(v) => {
                let mut map: HashMap<String, types::AttributeValue> = HashMap::new();
                for (key, val) in v.into_iter() {
                    map.insert(key, types::AttributeValue::from(val));
                }
                types::AttributeValue::M(map)
            }
            AttributeValue::N(v) => types::AttributeValue::N(v),
            AttributeValue::Ns(v) => types::AttributeValue::Ns(v),
            AttributeValue::Null(v) => types::AttributeValue::Null(v),
            AttributeValue::S(v) => types::AttributeValue::S(v),
            AttributeValue::Ss(v) => types::AttributeValue::Ss(v),
        }
    }
}

fn into_blob(value: String) -> Blob {
    Blob::new(value.into_bytes())
}
