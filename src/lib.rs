mod client;
mod config;
mod error;
mod migrator;
mod query;
mod types;

pub use client::{CliClient, Client, DynamodbClient};
pub use config::{Config, Mode};
pub use error::Error;
pub use migrator::{Migrator, Report};
pub use query::ParkQuery;
pub use types::{AttributeValue, Dump, Item};

pub const ENV_ADMIN: &str = "MIGRATOR_ADMIN";
pub const ENV_CONFIG_PATH: &str = "MIGRATOR_CONFIG_PATH";
pub const ENV_DUMP_PATH: &str = "MIGRATOR_DUMP_PATH";
pub const ENV_TABLE_NAME: &str = "MIGRATOR_TABLE_NAME";
pub const ENV_MODE: &str = "MIGRATOR_MODE";
pub const ENV_DYNAMODB_ENDPOINT_URL: &str = "DYNAMODB_ENDPOINT_URL";
