use std::path::PathBuf;

use thiserror::Error;

/// Errors for match export artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Export directory {0:?} is not a directory")]
    NotADirectory(PathBuf),

    #[error("Export destination rejected '{0}'")]
    Rejected(String),
}
