//! Schema records produced by a scan.

use serde::Serialize;
use smallvec::SmallVec;

use super::ordered_map::OrderedMap;
use crate::literals::NormalizedValue;

/// Field name → field declaration, in declaration order.
pub type FieldMap = OrderedMap<FieldSpec>;

/// Option name → normalized value, in source order.
pub type OptionMap = OrderedMap<NormalizedValue>;

/// One field declaration: `name = models.Kind(args..., key=value...)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Final segment of the constructor name (`models.CharField` → `CharField`).
    pub field_kind: String,
    pub positional_args: Vec<NormalizedValue>,
    pub options: OptionMap,
    /// Relation target exactly as written: `"self"`, a class name, or a
    /// dotted `app.Model` reference. Never resolved here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_name: Option<String>,
}

/// One discovered model class with its effective (inheritance-merged) fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDefinition {
    pub name: String,
    pub module_path: String,
    pub base_names: SmallVec<[String; 2]>,
    pub is_abstract: bool,
    pub fields: FieldMap,
    pub meta_options: OptionMap,
    /// 1-based line of the class statement.
    #[serde(skip)]
    pub line: u32,
}

/// Phase-1 view of a class: name and written bases only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHeader {
    pub name: String,
    pub module_path: String,
    pub base_names: SmallVec<[String; 2]>,
    pub line: u32,
}

/// Phase-2 view of a model class: its own declarations before inheritance.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedModel {
    pub header: ClassHeader,
    pub is_abstract: bool,
    pub fields: FieldMap,
    pub meta_options: OptionMap,
}
