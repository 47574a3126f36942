use super::Mode;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Optional YAML file with the same knobs as the environment variables.
/// An unreadable or invalid file is skipped with a warning.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    dump_path: Option<PathBuf>,
    table_name: Option<String>,
    mode: Option<Mode>,
    endpoint_url: Option<String>,
}

impl ConfigFile {
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Self {
        path.map(read_config).unwrap_or_default()
    }

    pub fn dump_path(&self) -> Option<PathBuf> {
        self.dump_path.clone()
    }

    pub fn table_name(&self) -> Option<String> {
        self.table_name.clone()
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.endpoint_url.clone()
    }
}

fn read_config<P: AsRef<Path>>(path: P) -> ConfigFile {
    _read_config(path).unwrap_or_else(|err| {
        warn!("{err}");
        warn!("Skip reading config file.");
        ConfigFile::default()
    })
}

fn _read_config<P: AsRef<Path>>(path: P) -> Result<ConfigFile, String> {
    let content = fs::read_to_string(&path)
        .map_err(|err| format!("Failed to read: {}. {err}", path.as_ref().to_string_lossy()))?;
    serde_yaml::from_str(&content)
        .map_err(|err| format!("Failed to deserialize config file: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_loads_config() {
        let result = _read_config("src/config/test/valid.yml");
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config.dump_path(), Some(PathBuf::from("./dump.json")));
        assert_eq!(config.table_name(), Some("parkreso".to_string()));
        assert_eq!(config.mode(), Some(Mode::Cli));
        assert_eq!(
            config.endpoint_url(),
            Some("http://localhost:8000".to_string())
        );
    }

    #[test]
    fn it_returns_err_if_the_file_does_not_exist() {
        let result = _read_config("src/config/test/non-exist.yml");
        assert!(result.is_err());

        let message = result.unwrap_err();
        assert!(
            message.starts_with("Failed to read: src/config/test/non-exist.yml."),
            "{message}"
        );
    }

    #[test]
    fn it_returns_err_if_the_file_is_invalid() {
        let result = _read_config("src/config/test/invalid.yml");
        assert!(result.is_err());

        let message = result.unwrap_err();
        assert!(
            message.starts_with("Failed to deserialize config file:"),
            "{message}"
        );
    }
}
