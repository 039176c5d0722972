//! Python parser backed by the tree-sitter Python grammar.

use modelscan_core::errors::ParseError;
use tree_sitter::Parser;

use super::error_tolerant::count_errors;
use super::syntax::SyntaxTree;
use super::types::SourceFile;

/// Reusable parser instance. One per scan; not shared across threads.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| ParseError::GrammarLoad {
                message: e.to_string(),
            })?;
        Ok(Self { parser })
    }

    /// Parse one file. Any syntax error rejects the whole file.
    pub fn parse(&mut self, file: &SourceFile) -> Result<SyntaxTree, ParseError> {
        let tree = self
            .parser
            .parse(file.text.as_bytes(), None)
            .ok_or_else(|| ParseError::NoTree {
                path: file.path.clone(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            let (error_count, ranges) = count_errors(root);
            let first = ranges.first().copied().unwrap_or_default();
            return Err(ParseError::Syntax {
                path: file.path.clone(),
                line: first.start.line + 1,
                column: first.start.column + 1,
                error_count: error_count.max(1),
            });
        }

        Ok(SyntaxTree::new(file.path.clone(), file.text.clone(), tree))
    }
}
