//! modelscan-analysis: static extraction of ORM model schemas from Python
//! source text.
//!
//! The pipeline never imports or executes the scanned code:
//!
//! 1. `parsers` turns each file into a tree-sitter syntax tree and exposes
//!    class definitions, assignments, and call expressions.
//! 2. `models::classifier` finds model classes by base-class name, iterating
//!    to a fixed point across every file before any field is read.
//! 3. `models::fields` and `models::meta` turn class bodies into field and
//!    option records, normalizing argument text through `literals`.
//! 4. `models::inheritance` folds abstract-base fields into descendants.
//! 5. `models::scanner` assembles ordered `ModelDefinition`s plus
//!    diagnostics, and `export` encodes them as YAML or JSON.

pub mod export;
pub mod literals;
pub mod models;
pub mod parsers;

pub use literals::{normalize_value, NormalizedValue};
pub use models::{Diagnostic, FieldSpec, ModelDefinition, ModelScanner, SchemaScan};
pub use parsers::SourceFile;
