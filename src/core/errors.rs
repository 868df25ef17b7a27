use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Failed to read input directory {path:?}: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open archive {path:?}: {source}")]
    OpenArchive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decompress {path:?}: {reason}")]
    Decompression { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Invalid split count: {0}")]
    InputFormat(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for PrepError {
    fn from(error: std::io::Error) -> Self {
        PrepError::Io(Box::new(error))
    }
}
