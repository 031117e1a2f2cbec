use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::calendar::format::ParseDateError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read config {path:?}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("invalid {field} '{value}': {source}")]
    InvalidDate {
        field: &'static str,
        value: String,
        source: ParseDateError,
    },

    #[error("failed to initialize logging: {reason}")]
    Logging { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
