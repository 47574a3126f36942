use crate::client::Client;
use crate::types::Dump;

use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of a migration pass. Failed items are counted, never retried.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Report {
    pub migrated: usize,
    pub failed: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} migrated, {} failed", self.migrated, self.failed)
    }
}

pub struct Migrator {
    client: Arc<dyn Client>,
    table_name: String,
}

impl Migrator {
    pub fn new<T: Into<String>>(client: Arc<dyn Client>, table_name: T) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// One put per item, in array order, each awaited before the next.
    /// A failed put is logged and tallied; the pass always continues.
    pub async fn run(&self, dump: &Dump) -> Report {
        let mut report = Report::default();

        info!(
            "Migrating {} items into table `{}`.",
            dump.len(),
            self.table_name
        );

        for (index, item) in dump.items().iter().enumerate() {
            match self.client.put_item(&self.table_name, item).await {
                Ok(()) => {
                    report.migrated += 1;
                }
                Err(err) => {
                    warn!("Failed to put item {index}.");
                    warn!("{:#?}", err);
                    report.failed += 1;
                }
            }
        }

        report
    }
}
