use super::Client;
use crate::query::ParkQuery;
use crate::types::Item;

use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_dynamodb::{config::Builder as ConfigBuilder, types::AttributeValue, Client as DbClient};
use std::collections::HashMap;

/// Puts items directly through the DynamoDB SDK, using ambient AWS
/// credentials. Item attributes must be DynamoDB-JSON.
#[derive(Debug, Clone)]
pub struct DynamodbClient {
    client: DbClient,
}

#[async_trait]
impl Client for DynamodbClient {
    async fn put_item(&self, table_name: &str, item: &Item) -> Result<()> {
        let attributes = item.attributes()?;

        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(attributes))
            .send()
            .await
            .map(drop)
            .map_err(anyhow::Error::from)
    }
}

impl DynamodbClient {
    pub async fn builder() -> DynamodbClientBuilder {
        DynamodbClientBuilder::new().await
    }

    /// Reads migrated parks back, applying the query's key condition and
    /// visibility filter server-side.
    pub async fn query(
        &self,
        table_name: &str,
        query: &ParkQuery,
    ) -> Result<Vec<HashMap<String, AttributeValue>>> {
        self.client
            .query()
            .table_name(table_name)
            .key_condition_expression(query.key_condition_expression())
            .set_filter_expression(query.filter_expression())
            .set_expression_attribute_values(Some(query.attribute_values()))
            .send()
            .await
            .map(|output| output.items.unwrap_or_default())
            .map_err(anyhow::Error::from)
    }
}

#[derive(Debug)]
pub struct DynamodbClientBuilder {
    builder: ConfigBuilder,
}

impl DynamodbClientBuilder {
    pub async fn new() -> Self {
        let config = aws_config::load_from_env().await;
        let builder = ConfigBuilder::from(&config);

        Self { builder }
    }

    pub fn endpoint_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => Self {
                builder: self.builder.endpoint_url(url),
            },
            None => self,
        }
    }

    pub fn build(self) -> DynamodbClient {
        let config = self.builder.build();
        let client = DbClient::from_conf(config);

        DynamodbClient { client }
    }
}
