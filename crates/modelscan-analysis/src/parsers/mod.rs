//! Tree-sitter Python parsing and typed traversal over the resulting tree.

pub mod error_tolerant;
pub mod python;
pub mod syntax;
pub mod types;

pub use python::PythonParser;
pub use syntax::{
    AssignTarget, Assignment, CallArguments, CallExpr, Callee, ClassDef, ClassDefinitions, Expr,
    Statement, SyntaxTree,
};
pub use types::{Position, Range, SourceFile};
