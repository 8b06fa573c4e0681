use thiserror::Error;

use equiload_core::RowParseError;
use equiload_warehouse::{ConfigurationError, ConnectionError, LoadError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigurationError),

    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Parse(#[from] RowParseError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("commit failed: {0}")]
    Commit(#[from] ::duckdb::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Connection(_) => 3,
            Self::Parse(_) => 4,
            Self::Load(_) | Self::Commit(_) => 5,
            Self::Serialization(_) => 10,
        }
    }
}
