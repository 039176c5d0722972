//! Configuration system for modelscan.
//! TOML-based, 3-layer resolution: CLI > project file > defaults.

pub mod export_config;
pub mod extraction_config;
pub mod modelscan_config;

pub use export_config::{ExportConfig, ExportFormat};
pub use extraction_config::ExtractionConfig;
pub use modelscan_config::{CliOverrides, ModelScanConfig};
