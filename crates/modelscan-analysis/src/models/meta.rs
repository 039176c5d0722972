//! Nested `Meta` block extraction.

use modelscan_core::config::ExtractionConfig;

use super::types::OptionMap;
use crate::literals::{normalize_value, NormalizedValue};
use crate::parsers::{ClassDef, Statement};

/// Reads class-level options from the nested configuration class.
pub struct MetaOptionsExtractor {
    meta_class_name: String,
    abstract_flag_name: String,
}

impl MetaOptionsExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            meta_class_name: config.effective_meta_class_name().to_string(),
            abstract_flag_name: config.effective_abstract_flag_name().to_string(),
        }
    }

    /// Every simple assignment of the last `Meta` block, normalized.
    /// No block yields an empty map.
    pub fn extract(&self, class: &ClassDef<'_>) -> OptionMap {
        let mut options = OptionMap::new();
        let meta = class.body().into_iter().rev().find_map(|stmt| match stmt {
            Statement::Class(inner) if inner.name() == self.meta_class_name => Some(inner),
            _ => None,
        });
        let Some(meta) = meta else {
            return options;
        };

        for stmt in meta.body() {
            let Statement::Assignment(assign) = stmt else {
                continue;
            };
            if let Some(name) = assign.name() {
                options.insert_last(name.to_string(), normalize_value(assign.value.text()));
            }
        }
        options
    }

    /// True only when the abstraction option normalizes to boolean `true`.
    pub fn is_abstract(&self, options: &OptionMap) -> bool {
        matches!(
            options.get(&self.abstract_flag_name),
            Some(NormalizedValue::Bool(true))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{PythonParser, SourceFile};

    fn options_of(src: &str) -> (OptionMap, bool) {
        let tree = PythonParser::new()
            .unwrap()
            .parse(&SourceFile::new("m.py", src))
            .unwrap();
        let class = tree.classes().next().unwrap();
        let extractor = MetaOptionsExtractor::new(&ExtractionConfig::default());
        let options = extractor.extract(&class);
        let is_abstract = extractor.is_abstract(&options);
        (options, is_abstract)
    }

    #[test]
    fn test_meta_options_normalized_in_order() {
        let (options, is_abstract) = options_of(
            "class Post(models.Model):\n    class Meta:\n        db_table = \"posts\"\n        ordering = [\"-created_at\"]\n        abstract = False\n",
        );
        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["db_table", "ordering", "abstract"]);
        assert_eq!(options.get("db_table"), Some(&NormalizedValue::Str("posts".into())));
        assert_eq!(
            options.get("ordering"),
            Some(&NormalizedValue::Opaque("[\"-created_at\"]".into()))
        );
        assert!(!is_abstract);
    }

    #[test]
    fn test_missing_meta_is_empty_and_concrete() {
        let (options, is_abstract) = options_of("class Tag(models.Model):\n    name = models.CharField()\n");
        assert!(options.is_empty());
        assert!(!is_abstract);
    }

    #[test]
    fn test_abstract_requires_boolean_true() {
        let (_, is_abstract) = options_of("class A(models.Model):\n    class Meta:\n        abstract = True\n");
        assert!(is_abstract);

        let (_, is_abstract) = options_of("class A(models.Model):\n    class Meta:\n        abstract = \"True\"\n");
        assert!(!is_abstract);

        let (_, is_abstract) = options_of("class A(models.Model):\n    class Meta:\n        abstract = 1\n");
        assert!(!is_abstract);
    }
}
