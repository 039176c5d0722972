//! YAML encoder using serde_yaml.

use modelscan_core::config::ExportFormat;
use modelscan_core::errors::ExportError;

use super::{SchemaDocument, SchemaEncoder};

pub struct YamlEncoder;

impl SchemaEncoder for YamlEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::Yaml
    }

    fn encode(&self, document: &SchemaDocument<'_>) -> Result<String, ExportError> {
        serde_yaml::to_string(document).map_err(|e| ExportError::Encode {
            format: self.format().to_string(),
            message: e.to_string(),
        })
    }
}
