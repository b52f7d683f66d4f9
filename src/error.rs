use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unsupported dimension: {0} cm")]
    UnsupportedDimension(u32),

    #[error("Failed to read store {path}")]
    ReadStore {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed store {path}")]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
