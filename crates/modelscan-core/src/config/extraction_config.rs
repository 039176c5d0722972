//! Extraction configuration: the knobs the scanner is constructed with.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ABSTRACT_FLAG_NAME, DEFAULT_META_CLASS_NAME, DEFAULT_RELATION_MARKERS,
    DEFAULT_ROOT_BASE_NAME,
};

/// Configuration for model discovery and field extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Field constructors treated as relations. Default: ForeignKey,
    /// OneToOneField, ManyToManyField.
    pub relation_markers: Vec<String>,
    /// Meta option that marks a model abstract. Default: `abstract`.
    pub abstract_flag_name: Option<String>,
    /// Root model base class. Default: `Model`.
    pub root_base_name: Option<String>,
    /// Nested configuration class name. Default: `Meta`.
    pub meta_class_name: Option<String>,
}

impl ExtractionConfig {
    /// Returns true if `field_kind` names a relationship constructor. An
    /// empty marker list means the three standard constructors.
    pub fn is_relation_marker(&self, field_kind: &str) -> bool {
        if self.relation_markers.is_empty() {
            DEFAULT_RELATION_MARKERS.contains(&field_kind)
        } else {
            self.relation_markers.iter().any(|m| m == field_kind)
        }
    }

    pub fn effective_abstract_flag_name(&self) -> &str {
        self.abstract_flag_name
            .as_deref()
            .unwrap_or(DEFAULT_ABSTRACT_FLAG_NAME)
    }

    pub fn effective_root_base_name(&self) -> &str {
        self.root_base_name.as_deref().unwrap_or(DEFAULT_ROOT_BASE_NAME)
    }

    pub fn effective_meta_class_name(&self) -> &str {
        self.meta_class_name.as_deref().unwrap_or(DEFAULT_META_CLASS_NAME)
    }
}
