use super::Item;
use crate::error::Error;

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The dump document: a DynamoDB export with a top-level `Items` array.
/// Fields other than `Items` (`Count`, `ScannedCount`, ...) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dump {
    items: Vec<Item>,
}

impl Dump {
    /// Reads and parses the dump document at `path`. This is the only
    /// fatal phase of a migration run.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(&path).map_err(|source| Error::ReadDump {
            path: path.as_ref().to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| Error::ParseDump {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
impl Dump {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}
