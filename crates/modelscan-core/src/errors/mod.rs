//! Error handling for modelscan.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod export_error;
pub mod extraction_error;
pub mod parse_error;
pub mod scan_error;
pub mod source_error;

pub use config_error::ConfigError;
pub use error_code::ModelScanErrorCode;
pub use export_error::ExportError;
pub use extraction_error::ExtractionError;
pub use parse_error::ParseError;
pub use scan_error::{ScanError, ScanResult};
pub use source_error::SourceError;
