//! Source input and position types shared by the parser and diagnostics.

use std::path::Path;

use modelscan_core::errors::SourceError;
use serde::{Deserialize, Serialize};

/// One already-enumerated source file. The scanner never discovers files
/// itself; callers hand it a list of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Opaque file identity, copied verbatim into `ModelDefinition::module_path`.
    pub path: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read one listed file from disk.
    pub fn read(path: &Path) -> Result<Self, SourceError> {
        let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| SourceError::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;
        Ok(Self::new(path.display().to_string(), text))
    }
}

/// Zero-based position as reported by tree-sitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn from_ts_node(node: &tree_sitter::Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start: Position {
                line: start.row as u32,
                column: start.column as u32,
            },
            end: Position {
                line: end.row as u32,
                column: end.column as u32,
            },
        }
    }
}
