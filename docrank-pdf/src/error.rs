use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("io error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input directory does not exist: {0}")]
    MissingInputDir(PathBuf),
    #[error("PDF is password protected: {0}")]
    PasswordProtected(PathBuf),
    #[error("PDF is corrupted or malformed: {0}")]
    Corrupted(PathBuf),
    #[error("failed to read '{path}': {message}")]
    Read { path: PathBuf, message: String },
    #[error("failed to serialize corpus: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;
