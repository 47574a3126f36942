use super::Client;
use crate::types::Item;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Records every put in call order. Invocations listed via `fail_on`
/// are still recorded but return an error, like a failed subprocess.
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    puts: Arc<Mutex<Vec<(String, Item)>>>,
    fail_on: Arc<Mutex<Vec<usize>>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(&self, index: usize) {
        self.fail_on.lock().unwrap().push(index);
    }

    pub fn puts(&self) -> Vec<(String, Item)> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Client for MockClient {
    async fn put_item(&self, table_name: &str, item: &Item) -> Result<()> {
        let mut puts = self.puts.lock().unwrap();
        let index = puts.len();
        puts.push((table_name.to_string(), item.clone()));

        if self.fail_on.lock().unwrap().contains(&index) {
            return Err(anyhow::anyhow!("Mock failure at index {index}"));
        }

        Ok(())
    }
}
