use crate::{ENV_CONFIG_PATH, ENV_DUMP_PATH, ENV_DYNAMODB_ENDPOINT_URL, ENV_MODE, ENV_TABLE_NAME};

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

mod file;

use file::ConfigFile;

const DEFAULT_DUMP_PATH: &str = "./dump.json";
const DEFAULT_TABLE_NAME: &str = "parkreso";

/// How items are written to the target table.
#[derive(Debug, Default, Copy, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Direct puts through the DynamoDB SDK.
    #[default]
    Sdk,
    /// One `aws dynamodb put-item` child process per item.
    Cli,
}

impl Mode {
    fn parse(value: &str) -> Option<Mode> {
        match value.to_ascii_lowercase().as_str() {
            "sdk" => Some(Mode::Sdk),
            "cli" => Some(Mode::Cli),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Config {
    dump_path: PathBuf,
    table_name: String,
    mode: Mode,
    endpoint_url: Option<String>,
}

impl Config {
    /// Environment variables win over the optional config file; hard
    /// defaults match the original migration target.
    pub fn new() -> Self {
        let conf_path = env::var(ENV_CONFIG_PATH).ok();
        let file = ConfigFile::new(conf_path);

        let dump_path = env::var(ENV_DUMP_PATH)
            .ok()
            .map(PathBuf::from)
            .or_else(|| file.dump_path())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DUMP_PATH));

        let table_name = env::var(ENV_TABLE_NAME)
            .ok()
            .or_else(|| file.table_name())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

        let mode = env::var(ENV_MODE)
            .ok()
            .and_then(|m| Mode::parse(&m))
            .or_else(|| file.mode())
            .unwrap_or_default();

        let endpoint_url = env::var(ENV_DYNAMODB_ENDPOINT_URL)
            .ok()
            .or_else(|| file.endpoint_url());

        Self {
            dump_path,
            table_name,
            mode,
            endpoint_url,
        }
    }

    pub fn dump_path(&self) -> PathBuf {
        self.dump_path.clone()
    }

    pub fn table_name(&self) -> String {
        self.table_name.clone()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.endpoint_url.clone()
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_known_modes() {
        assert_eq!(Mode::parse("sdk"), Some(Mode::Sdk));
        assert_eq!(Mode::parse("cli"), Some(Mode::Cli));
        assert_eq!(Mode::parse("CLI"), Some(Mode::Cli));
    }

    #[test]
    fn it_rejects_unknown_modes() {
        assert_eq!(Mode::parse("shell"), None);
    }
}
