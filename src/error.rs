use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Unknown setting '{0}'")]
    UnknownSetting(String),

    #[error("Failed to read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: invalid line {line}")]
    ConfigParse { path: PathBuf, line: usize },

    #[error("Specified data directory \"{0}\" does not exist")]
    DatadirMissing(PathBuf),

    #[error("Failed to create data directory {path}: {source}")]
    DatadirCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unknown chain '{0}'")]
    UnknownChain(String),

    #[error("Invalid combination of -regtest and -testnet")]
    ConflictingChains,
}
