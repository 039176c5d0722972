//! Errors reading an already-enumerated source file.

use std::path::PathBuf;

use super::error_code::{self, ModelScanErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Source file is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },
}

impl ModelScanErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        error_code::SOURCE_ERROR
    }
}
