use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

const PARK_PARTITION: &str = "park";

/// Read-back query against the migrated table: all parks, or one park by
/// its sort key. Non-admin callers only see items with `visible = true`;
/// admin callers see everything.
#[derive(Debug, Clone, Default)]
pub struct ParkQuery {
    park: Option<String>,
    admin: bool,
}

impl ParkQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn park<T: Into<String>>(mut self, park: T) -> Self {
        self.park = Some(park.into());
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn key_condition_expression(&self) -> String {
        match self.park {
            Some(_) => "pk = :pk AND sk = :sk".to_string(),
            None => "pk = :pk".to_string(),
        }
    }

    pub fn filter_expression(&self) -> Option<String> {
        if self.admin {
            None
        } else {
            Some("visible = :visible".to_string())
        }
    }

    pub fn attribute_values(&self) -> HashMap<String, AttributeValue> {
        let mut values: HashMap<String, AttributeValue> = HashMap::new();
        values.insert(":pk".into(), AttributeValue::S(PARK_PARTITION.into()));

        if let Some(park) = self.park.as_ref() {
            values.insert(":sk".into(), AttributeValue::S(park.clone()));
        }

        if !self.admin {
            values.insert(":visible".into(), AttributeValue::Bool(true));
        }

        values
    }
}
