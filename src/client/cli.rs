use super::Client;
use crate::types::Item;

use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;

/// Reproduces the original migration path: one `aws dynamodb put-item`
/// child process per item, run through the shell so the quote-escaped
/// payload is embedded the same way. Credentials stay ambient in the
/// inherited environment.
#[derive(Debug, Clone)]
pub struct CliClient {
    program: String,
}

impl CliClient {
    pub fn new<T: Into<String>>(program: T) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self, table_name: &str, item: &Item) -> String {
        format!(
            "{} dynamodb put-item --table-name=\"{}\" --item=\"{}\"",
            self.program,
            table_name,
            item.escaped_payload(),
        )
    }
}

impl Default for CliClient {
    fn default() -> CliClient {
        CliClient::new("aws")
    }
}

#[async_trait]
impl Client for CliClient {
    async fn put_item(&self, table_name: &str, item: &Item) -> Result<()> {
        let status = Command::new("sh")
            .arg("-c")
            .arg(self.command_line(table_name, item))
            .status()
            .await?;

        if status.success() {
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "`{} dynamodb put-item` exited with {status}",
                self.program
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_builds_the_put_item_command_line() {
        let client = CliClient::default();
        let item = Item::new(json!({ "id": "1", "name": "A" }));

        assert_eq!(
            client.command_line("parkreso", &item),
            r#"aws dynamodb put-item --table-name="parkreso" --item="{\"id\":\"1\",\"name\":\"A\"}""#
        );
    }

    #[tokio::test]
    async fn it_maps_a_zero_exit_status_to_ok() {
        let client = CliClient::new("true");
        let item = Item::new(json!({ "id": { "S": "1" } }));

        let result = client.put_item("parkreso", &item).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn it_maps_a_nonzero_exit_status_to_err() {
        let client = CliClient::new("false");
        let item = Item::new(json!({ "id": { "S": "1" } }));

        let result = client.put_item("parkreso", &item).await;
        assert!(result.is_err());
    }
}
