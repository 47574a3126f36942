mod cli;
mod dynamodb;
#[cfg(test)]
mod mock;

use crate::types::Item;

use anyhow::Result;
use async_trait::async_trait;

/// The seam over the target data store: one put per item, awaited before
/// the next item starts.
#[async_trait]
pub trait Client: Send + Sync {
    async fn put_item(&self, table_name: &str, item: &Item) -> Result<()>;
}

pub use cli::CliClient;
pub use dynamodb::DynamodbClient;
#[cfg(test)]
pub use mock::MockClient;
