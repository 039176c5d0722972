//! Structured diagnostics handed to the host runtime.

use std::fmt;

use serde::Serialize;

use super::types::{FieldSpec, ModelDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// 1-based file position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticPayload {
    Model(ModelDefinition),
    Field {
        model: String,
        field: String,
        spec: FieldSpec,
    },
    None,
}

/// One reportable event: a discovered model, a skipped field, an
/// unparseable file, or a resolved inheritance conflict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub location: Location,
    pub severity: Severity,
    /// Stable code for filtering (`MODEL_DISCOVERED`, `PARSE_ERROR`, ...).
    pub code: &'static str,
    pub message: String,
    pub payload: DiagnosticPayload,
}

impl Diagnostic {
    pub const MODEL_DISCOVERED: &'static str = "MODEL_DISCOVERED";
    pub const MISSING_RELATION_TARGET: &'static str = "MISSING_RELATION_TARGET";
    pub const FIELD_CONFLICT: &'static str = "FIELD_CONFLICT";

    pub fn model(model: &ModelDefinition) -> Self {
        Self {
            location: Location::new(model.module_path.clone(), model.line, 1),
            severity: Severity::Info,
            code: Self::MODEL_DISCOVERED,
            message: format!(
                "{} model {} with {} field(s)",
                if model.is_abstract { "abstract" } else { "concrete" },
                model.name,
                model.fields.len()
            ),
            payload: DiagnosticPayload::Model(model.clone()),
        }
    }

    pub fn error(location: Location, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            location,
            severity: Severity::Error,
            code,
            message: message.into(),
            payload: DiagnosticPayload::None,
        }
    }

    pub fn warning(location: Location, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            location,
            severity: Severity::Warning,
            code,
            message: message.into(),
            payload: DiagnosticPayload::None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}] {}", self.location, self.severity, self.code, self.message)
    }
}
