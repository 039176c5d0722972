//! Scan errors and non-fatal error collection.

use super::error_code::ModelScanErrorCode;
use super::{ConfigError, ExportError, ExtractionError, ParseError, SourceError};

/// Any error raised while scanning a file set.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl ModelScanErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Extraction(e) => e.error_code(),
            Self::Source(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
        }
    }
}

/// Result of a scan that accumulates non-fatal errors.
/// Partial data is always returned, even when some files or fields fail.
#[derive(Debug, Default)]
pub struct ScanResult<T: Default = ()> {
    /// The extracted data.
    pub data: T,
    /// Non-fatal errors collected during the scan.
    pub errors: Vec<ScanError>,
}

impl<T: Default> ScanResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the result.
    pub fn add_error(&mut self, error: impl Into<ScanError>) {
        self.errors.push(error.into());
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
