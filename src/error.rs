use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the dump document. These are the only fatal
/// errors: anything after a successful load is tallied per item instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read dump file `{}`: {source}", path.display())]
    ReadDump {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse dump file `{}`: {source}", path.display())]
    ParseDump {
        path: PathBuf,
        source: serde_json::Error,
    },
}
