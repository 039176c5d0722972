//! Parser errors.

use super::error_code::{self, ModelScanErrorCode};

/// Errors that can occur while turning one source file into a syntax tree.
/// Always scoped to a single file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar could not be loaded: {message}")]
    GrammarLoad { message: String },

    #[error("Parser produced no tree for {path}")]
    NoTree { path: String },

    #[error("Invalid syntax in {path} at {line}:{column} ({error_count} error node(s))")]
    Syntax {
        path: String,
        line: u32,
        column: u32,
        error_count: u32,
    },
}

impl ParseError {
    /// Path of the offending file, when the error is file-scoped.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::GrammarLoad { .. } => None,
            Self::NoTree { path } | Self::Syntax { path, .. } => Some(path),
        }
    }
}

impl ModelScanErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::GrammarLoad { .. } => error_code::GRAMMAR_ERROR,
            _ => error_code::PARSE_ERROR,
        }
    }
}
