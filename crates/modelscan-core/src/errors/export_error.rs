//! Document export errors.

use std::path::PathBuf;

use super::error_code::{self, ModelScanErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to encode schema as {format}: {message}")]
    Encode { format: String, message: String },

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ModelScanErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
