//! CLI error type

use std::path::PathBuf;

use lectern_lib::error::{ConfigError, TreeError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid list: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("{0}")]
    InvalidArgument(String),
}
