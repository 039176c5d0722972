//! Model class classification by written base-class names.
//!
//! A class is a model when one of its bases, with module qualifiers
//! stripped, names the root base or a class already known to be a model.
//! Classification runs over every header of every file and repeats until no
//! new model appears, so declaration order and file order never matter.

use modelscan_core::config::ExtractionConfig;
use rustc_hash::FxHashSet;

use super::types::ClassHeader;

/// Final segment of a dotted name: `django.db.models.Model` → `Model`.
pub fn strip_qualifier(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Owns the growing set of known model identifiers during classification.
pub struct ModelClassifier {
    known: FxHashSet<String>,
}

impl ModelClassifier {
    /// Seed the known set with the configured root base.
    pub fn new(config: &ExtractionConfig) -> Self {
        let mut known = FxHashSet::default();
        known.insert(config.effective_root_base_name().to_string());
        Self { known }
    }

    /// Propagate model membership to a fixed point and freeze the result.
    pub fn classify(mut self, headers: &[ClassHeader]) -> ModelRegistry {
        let mut passes = 0usize;
        loop {
            passes += 1;
            let mut added = 0usize;
            for header in headers {
                if self.known.contains(&header.name) {
                    continue;
                }
                if extends_known(header, &self.known) {
                    self.known.insert(header.name.clone());
                    added += 1;
                }
            }
            tracing::debug!(pass = passes, added, "model classification pass");
            if added == 0 {
                break;
            }
        }
        ModelRegistry { known: self.known }
    }
}

/// Read-only classification result shared with extraction.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    known: FxHashSet<String>,
}

impl ModelRegistry {
    /// True if the header's bases reach a known model.
    pub fn is_model(&self, header: &ClassHeader) -> bool {
        extends_known(header, &self.known)
    }

    /// Known identifiers, the root included.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

fn extends_known(header: &ClassHeader, known: &FxHashSet<String>) -> bool {
    header
        .base_names
        .iter()
        .any(|base| known.contains(strip_qualifier(base)))
}
