//! Schema document encoders.
//!
//! The assembled model sequence is wrapped in a `SchemaDocument` and handed
//! to one encoder per output format. Encoders never reorder anything: models,
//! fields, options and meta options come out in the order they were built.

pub mod json;
pub mod yaml;

use std::path::PathBuf;

use modelscan_core::config::{ExportConfig, ExportFormat};
use modelscan_core::errors::ExportError;
use serde::Serialize;

use crate::models::ModelDefinition;

/// Top-level document shape: `{ models: [...] }`.
#[derive(Debug, Serialize)]
pub struct SchemaDocument<'a> {
    pub models: &'a [ModelDefinition],
}

impl<'a> SchemaDocument<'a> {
    pub fn new(models: &'a [ModelDefinition]) -> Self {
        Self { models }
    }
}

/// Turns a schema document into text.
pub trait SchemaEncoder: Send + Sync {
    fn format(&self) -> ExportFormat;
    fn encode(&self, document: &SchemaDocument<'_>) -> Result<String, ExportError>;
}

pub fn create_encoder(format: ExportFormat) -> Box<dyn SchemaEncoder> {
    match format {
        ExportFormat::Yaml => Box::new(yaml::YamlEncoder),
        ExportFormat::Json => Box::new(json::JsonEncoder),
    }
}

/// Encode `models` in `format`.
pub fn render(models: &[ModelDefinition], format: ExportFormat) -> Result<String, ExportError> {
    create_encoder(format).encode(&SchemaDocument::new(models))
}

/// Encode `models` and write them to the configured output path.
pub fn write(models: &[ModelDefinition], config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let path = PathBuf::from(config.effective_output_path());
    let text = render(models, config.effective_format())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(&path, text).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        format = %config.effective_format(),
        models = models.len(),
        "schema written"
    );
    Ok(path)
}
