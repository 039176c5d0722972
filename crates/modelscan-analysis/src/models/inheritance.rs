//! Abstract-base field inheritance.
//!
//! Only abstract ancestors contribute fields; a concrete ancestor stops the
//! walk. For each class the merge is:
//!
//! 1. For each base in written order that resolves to an abstract model,
//!    take that base's effective fields. A name already present keeps its
//!    position and takes the later base's declaration.
//! 2. Overlay the class's own fields. An own declaration replaces an
//!    inherited one and sits at the class's own position.

use modelscan_core::errors::ExtractionError;
use rustc_hash::FxHashMap;

use super::classifier::strip_qualifier;
use super::types::{ExtractedModel, FieldMap, FieldSpec};

/// Two abstract bases declared the same field differently.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConflict {
    /// Index of the class where the bases meet.
    pub model_index: usize,
    pub model: String,
    pub field: String,
    /// Base whose declaration was kept.
    pub winning_base: String,
    pub winner: FieldSpec,
}

#[derive(Debug, Default)]
pub struct InheritanceOutcome {
    /// Effective fields, parallel to the input slice.
    pub fields: Vec<FieldMap>,
    pub conflicts: Vec<FieldConflict>,
    pub errors: Vec<ExtractionError>,
}

pub struct InheritanceResolver<'a> {
    models: &'a [ExtractedModel],
    by_name: FxHashMap<&'a str, Vec<usize>>,
    memo: Vec<Option<FieldMap>>,
    conflicts: Vec<FieldConflict>,
    errors: Vec<ExtractionError>,
}

impl<'a> InheritanceResolver<'a> {
    pub fn new(models: &'a [ExtractedModel]) -> Self {
        let mut by_name: FxHashMap<&'a str, Vec<usize>> = FxHashMap::default();
        for (i, model) in models.iter().enumerate() {
            by_name.entry(model.header.name.as_str()).or_default().push(i);
        }
        Self {
            models,
            by_name,
            memo: vec![None; models.len()],
            conflicts: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Resolve the effective field map of every model.
    pub fn resolve(mut self) -> InheritanceOutcome {
        let mut stack = Vec::new();
        let fields = (0..self.models.len())
            .map(|i| self.effective(i, &mut stack))
            .collect();
        InheritanceOutcome {
            fields,
            conflicts: self.conflicts,
            errors: self.errors,
        }
    }

    fn effective(&mut self, index: usize, stack: &mut Vec<usize>) -> FieldMap {
        if let Some(done) = &self.memo[index] {
            return done.clone();
        }

        let models = self.models;
        let model = &models[index];
        stack.push(index);

        let mut merged = FieldMap::new();
        for base in &model.header.base_names {
            let Some(base_index) = self.lookup(base, index) else {
                continue;
            };
            if !models[base_index].is_abstract {
                continue;
            }
            if stack.contains(&base_index) {
                tracing::warn!(class = %model.header.name, base = %base, "inheritance cycle");
                self.errors.push(ExtractionError::InheritanceCycle {
                    path: model.header.module_path.clone(),
                    class: model.header.name.clone(),
                    base: base.clone(),
                    line: model.header.line,
                });
                continue;
            }

            let inherited = self.effective(base_index, stack);
            for (name, spec) in inherited {
                if let Some(existing) = merged.get(&name) {
                    if existing != &spec {
                        self.conflicts.push(FieldConflict {
                            model_index: index,
                            model: model.header.name.clone(),
                            field: name.clone(),
                            winning_base: base.clone(),
                            winner: spec.clone(),
                        });
                    }
                }
                merged.insert(name, spec);
            }
        }
        let inherited_count = merged.len();

        for (name, spec) in model.fields.iter() {
            merged.insert_last(name.to_string(), spec.clone());
        }

        tracing::trace!(
            class = %model.header.name,
            inherited = inherited_count,
            total = merged.len(),
            "resolved fields"
        );

        stack.pop();
        self.memo[index] = Some(merged.clone());
        merged
    }

    /// A base resolves to another model of that name, preferring one declared
    /// in the same file, then the first in scan order. A class never resolves
    /// to itself (`class Article(core.Article)`).
    fn lookup(&self, base: &str, index: usize) -> Option<usize> {
        let module_path = &self.models[index].header.module_path;
        let mut candidates = self
            .by_name
            .get(strip_qualifier(base))?
            .iter()
            .copied()
            .filter(|&i| i != index);
        let first = candidates.next()?;
        if &self.models[first].header.module_path == module_path {
            return Some(first);
        }
        candidates
            .find(|&i| &self.models[i].header.module_path == module_path)
            .or(Some(first))
    }
}

#[cfg(test)]
mod tests {
    use smallvec::SmallVec;

    use super::*;
    use crate::literals::NormalizedValue;
    use crate::models::types::{ClassHeader, OptionMap};

    fn field(kind: &str) -> FieldSpec {
        FieldSpec {
            field_kind: kind.to_string(),
            positional_args: Vec::new(),
            options: OptionMap::new(),
            relation_target: None,
            related_name: None,
        }
    }

    fn model(name: &str, bases: &[&str], is_abstract: bool, fields: &[(&str, FieldSpec)]) -> ExtractedModel {
        model_in("m.py", name, bases, is_abstract, fields)
    }

    fn model_in(
        path: &str,
        name: &str,
        bases: &[&str],
        is_abstract: bool,
        fields: &[(&str, FieldSpec)],
    ) -> ExtractedModel {
        ExtractedModel {
            header: ClassHeader {
                name: name.to_string(),
                module_path: path.to_string(),
                base_names: bases.iter().map(|b| b.to_string()).collect::<SmallVec<_>>(),
                line: 1,
            },
            is_abstract,
            fields: fields.iter().map(|(n, f)| (n.to_string(), f.clone())).collect(),
            meta_options: OptionMap::new(),
        }
    }

    fn keys(map: &FieldMap) -> Vec<&str> {
        map.keys().collect()
    }

    #[test]
    fn test_concrete_base_does_not_contribute() {
        let models = vec![
            model("Place", &["models.Model"], false, &[("address", field("CharField"))]),
            model("Restaurant", &["Place"], false, &[("menu", field("TextField"))]),
        ];
        let out = InheritanceResolver::new(&models).resolve();
        assert_eq!(keys(&out.fields[1]), vec!["menu"]);
    }

    #[test]
    fn test_multi_level_abstract_chain() {
        let models = vec![
            model("Stamped", &["models.Model"], true, &[("created_at", field("DateTimeField"))]),
            model("Owned", &["Stamped"], true, &[("owner", field("ForeignKey"))]),
            model("Doc", &["Owned"], false, &[("body", field("TextField"))]),
        ];
        let out = InheritanceResolver::new(&models).resolve();
        assert_eq!(keys(&out.fields[1]), vec!["created_at", "owner"]);
        assert_eq!(keys(&out.fields[2]), vec!["created_at", "owner", "body"]);
    }

    #[test]
    fn test_diamond_later_base_wins_in_place() {
        let mut loud = field("CharField");
        loud.options.insert("max_length".into(), NormalizedValue::Int(99));
        let models = vec![
            model("A", &["Model"], true, &[("label", field("CharField")), ("a", field("IntegerField"))]),
            model("B", &["Model"], true, &[("b", field("IntegerField")), ("label", loud.clone())]),
            model("C", &["A", "B"], false, &[("c", field("IntegerField"))]),
        ];
        let out = InheritanceResolver::new(&models).resolve();

        assert_eq!(keys(&out.fields[2]), vec!["label", "a", "b", "c"]);
        assert_eq!(out.fields[2].get("label"), Some(&loud));
        assert_eq!(out.conflicts.len(), 1);
        assert_eq!(out.conflicts[0].model, "C");
        assert_eq!(out.conflicts[0].winning_base, "B");
    }

    #[test]
    fn test_shared_grandparent_is_not_a_conflict() {
        let models = vec![
            model("Base", &["Model"], true, &[("id_code", field("CharField"))]),
            model("Left", &["Base"], true, &[]),
            model("Right", &["Base"], true, &[]),
            model("Join", &["Left", "Right"], false, &[]),
        ];
        let out = InheritanceResolver::new(&models).resolve();
        assert_eq!(keys(&out.fields[3]), vec!["id_code"]);
        assert!(out.conflicts.is_empty());
    }

    #[test]
    fn test_cycle_is_reported_not_followed() {
        let models = vec![
            model("X", &["Model", "Y"], true, &[("x", field("IntegerField"))]),
            model("Y", &["X"], true, &[("y", field("IntegerField"))]),
        ];
        let out = InheritanceResolver::new(&models).resolve();
        assert_eq!(out.errors.len(), 1);
        assert_eq!(keys(&out.fields[0]), vec!["y", "x"]);
    }

    #[test]
    fn test_same_named_base_in_other_file() {
        let models = vec![
            model_in("core/models.py", "Article", &["models.Model"], true, &[("title", field("CharField"))]),
            model_in("news/models.py", "Article", &["core.Article"], false, &[("body", field("TextField"))]),
        ];
        let out = InheritanceResolver::new(&models).resolve();
        assert!(out.errors.is_empty());
        assert_eq!(keys(&out.fields[1]), vec!["title", "body"]);
        assert_eq!(keys(&out.fields[0]), vec!["title"]);
    }

    #[test]
    fn test_cycle_error_names_its_file() {
        let models = vec![
            model_in("a.py", "Loop", &["models.Model"], false, &[]),
            model_in("b.py", "Other", &["models.Model", "Loop"], true, &[]),
            model_in("b.py", "Loop", &["Other"], true, &[]),
        ];
        let out = InheritanceResolver::new(&models).resolve();
        assert_eq!(
            out.errors,
            vec![ExtractionError::InheritanceCycle {
                path: "b.py".into(),
                class: "Loop".into(),
                base: "Other".into(),
                line: 1,
            }]
        );
    }
}
