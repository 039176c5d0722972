//! Extraction errors. Scoped to one field or one class; never fatal to a scan.

use super::error_code::{self, ModelScanErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("Unsupported field constructor `{expression}` for {class}.{field} in {path}:{line}")]
    UnsupportedExpression {
        path: String,
        class: String,
        field: String,
        line: u32,
        expression: String,
    },

    #[error("Inheritance cycle through {class} via base {base} in {path}:{line}")]
    InheritanceCycle {
        path: String,
        class: String,
        base: String,
        line: u32,
    },
}

impl ModelScanErrorCode for ExtractionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedExpression { .. } => error_code::UNSUPPORTED_EXPRESSION,
            Self::InheritanceCycle { .. } => error_code::INHERITANCE_CYCLE,
        }
    }
}
