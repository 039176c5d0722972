//! Model discovery and schema assembly.

pub mod classifier;
pub mod diagnostics;
pub mod fields;
pub mod inheritance;
pub mod meta;
pub mod ordered_map;
pub mod scanner;
pub mod types;

pub use classifier::{ModelClassifier, ModelRegistry};
pub use diagnostics::{Diagnostic, DiagnosticPayload, Location, Severity};
pub use fields::FieldExtractor;
pub use inheritance::{FieldConflict, InheritanceOutcome, InheritanceResolver};
pub use meta::MetaOptionsExtractor;
pub use ordered_map::OrderedMap;
pub use scanner::{ModelScanner, SchemaScan};
pub use types::{ClassHeader, ExtractedModel, FieldMap, FieldSpec, ModelDefinition, OptionMap};
