//! JSON encoder, pretty-printed with a trailing newline.

use modelscan_core::config::ExportFormat;
use modelscan_core::errors::ExportError;

use super::{SchemaDocument, SchemaEncoder};

pub struct JsonEncoder;

impl SchemaEncoder for JsonEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn encode(&self, document: &SchemaDocument<'_>) -> Result<String, ExportError> {
        let mut text = serde_json::to_string_pretty(document).map_err(|e| ExportError::Encode {
            format: self.format().to_string(),
            message: e.to_string(),
        })?;
        text.push('\n');
        Ok(text)
    }
}
