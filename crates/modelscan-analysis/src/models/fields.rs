//! Field declaration extraction from a model class body.

use modelscan_core::config::ExtractionConfig;
use modelscan_core::constants::{RELATED_NAME_OPTION, RELATION_TARGET_OPTION};

use super::types::{FieldMap, FieldSpec, OptionMap};
use crate::literals::{normalize_value, NormalizedValue};
use crate::parsers::{CallExpr, Callee, ClassDef, Expr, Statement};

/// A class-body assignment that looked like a field but could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    /// The callee is not a plain dotted name; the field is skipped.
    UnsupportedCallee {
        field: String,
        line: u32,
        expression: String,
    },
    /// A relation constructor with no target argument; the field is kept.
    MissingRelationTarget {
        field: String,
        line: u32,
        field_kind: String,
    },
}

/// Own fields of one class plus anything worth reporting.
#[derive(Debug, Clone, Default)]
pub struct ClassFields {
    pub fields: FieldMap,
    pub issues: Vec<FieldIssue>,
}

pub struct FieldExtractor {
    config: ExtractionConfig,
}

impl FieldExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Every `name = callee(...)` in the class body, in source order.
    /// A name bound twice keeps the last binding at its later position.
    pub fn extract(&self, class: &ClassDef<'_>) -> ClassFields {
        let mut out = ClassFields::default();

        for stmt in class.body() {
            let Statement::Assignment(assign) = stmt else {
                continue;
            };
            let (Some(name), Expr::Call(call)) = (assign.name(), assign.value) else {
                continue;
            };

            let dotted = match call.callee() {
                Callee::Dotted(dotted) => dotted,
                Callee::Opaque(expression) => {
                    tracing::warn!(
                        class = class.name(),
                        field = name,
                        expression,
                        "skipping field with unsupported constructor"
                    );
                    out.issues.push(FieldIssue::UnsupportedCallee {
                        field: name.to_string(),
                        line: assign.line,
                        expression: expression.to_string(),
                    });
                    continue;
                }
            };

            let field_kind = dotted.rsplit('.').next().unwrap_or(&dotted).to_string();
            let spec = self.build_field(field_kind, &call);
            if self.config.is_relation_marker(&spec.field_kind) && spec.relation_target.is_none() {
                out.issues.push(FieldIssue::MissingRelationTarget {
                    field: name.to_string(),
                    line: assign.line,
                    field_kind: spec.field_kind.clone(),
                });
            }
            out.fields.insert_last(name.to_string(), spec);
        }
        out
    }

    fn build_field(&self, field_kind: String, call: &CallExpr<'_>) -> FieldSpec {
        let args = call.arguments();

        let positional_args = args.positional.iter().map(|raw| normalize_value(raw)).collect();
        let mut options = OptionMap::new();
        for (key, raw) in &args.keywords {
            options.insert(key.to_string(), normalize_value(raw));
        }

        // `*args`/`**kwargs` hide whatever they carry, so a splat in first
        // position leaves only `to=` as a possible target.
        let relation_target = if self.config.is_relation_marker(&field_kind) {
            args.positional
                .first()
                .copied()
                .filter(|raw| !raw.starts_with('*'))
                .or_else(|| {
                    args.keywords
                        .iter()
                        .find(|(key, _)| *key == RELATION_TARGET_OPTION)
                        .map(|(_, raw)| *raw)
                })
                .map(relation_target_text)
        } else {
            None
        };

        let related_name = match options.get(RELATED_NAME_OPTION) {
            Some(NormalizedValue::Str(s)) | Some(NormalizedValue::Opaque(s)) => Some(s.clone()),
            _ => None,
        };

        FieldSpec {
            field_kind,
            positional_args,
            options,
            relation_target,
            related_name,
        }
    }
}

/// A string target loses its quotes; anything else (a bare class name, a
/// dotted reference) is kept exactly as written.
fn relation_target_text(raw: &str) -> String {
    match normalize_value(raw) {
        NormalizedValue::Str(s) => s,
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{PythonParser, SourceFile};

    fn extract(src: &str) -> ClassFields {
        let tree = PythonParser::new()
            .unwrap()
            .parse(&SourceFile::new("m.py", src))
            .unwrap();
        let class = tree.classes().next().unwrap();
        FieldExtractor::new(&ExtractionConfig::default()).extract(&class)
    }

    #[test]
    fn test_relation_target_and_related_name() {
        let out = extract(
            "class Comment(models.Model):\n    parent = models.ForeignKey(\"self\", on_delete=models.CASCADE, null=True, related_name=\"replies\")\n    post = models.ForeignKey(Post, on_delete=models.CASCADE)\n    user = models.OneToOneField(to='auth.User', on_delete=models.CASCADE)\n",
        );
        let parent = out.fields.get("parent").unwrap();
        assert_eq!(parent.field_kind, "ForeignKey");
        assert_eq!(parent.relation_target.as_deref(), Some("self"));
        assert_eq!(parent.related_name.as_deref(), Some("replies"));
        assert_eq!(parent.positional_args, vec![NormalizedValue::Str("self".into())]);
        assert_eq!(
            parent.options.get("on_delete"),
            Some(&NormalizedValue::Opaque("models.CASCADE".into()))
        );
        assert_eq!(parent.options.get("null"), Some(&NormalizedValue::Bool(true)));

        let post = out.fields.get("post").unwrap();
        assert_eq!(post.relation_target.as_deref(), Some("Post"));
        assert_eq!(post.related_name, None);

        let user = out.fields.get("user").unwrap();
        assert_eq!(user.relation_target.as_deref(), Some("auth.User"));
        assert!(out.issues.is_empty());
    }

    #[test]
    fn test_scalar_fields_have_no_target() {
        let out = extract("class Tag(models.Model):\n    name = models.CharField(max_length=50, unique=True)\n");
        let name = out.fields.get("name").unwrap();
        assert_eq!(name.field_kind, "CharField");
        assert!(name.positional_args.is_empty());
        assert_eq!(name.options.get("max_length"), Some(&NormalizedValue::Int(50)));
        assert!(name.relation_target.is_none());
    }

    #[test]
    fn test_non_call_assignments_and_methods_ignored() {
        let out = extract(
            "class Post(models.Model):\n    STATUS = [(\"d\", \"Draft\")]\n    LIMIT = 10\n    title = CharField()\n    def __str__(self):\n        return self.title\n",
        );
        assert_eq!(out.fields.keys().collect::<Vec<_>>(), vec!["title"]);
        assert_eq!(out.fields.get("title").unwrap().field_kind, "CharField");
    }

    #[test]
    fn test_unsupported_callee_skips_only_that_field() {
        let out = extract(
            "class A(models.Model):\n    a = models.IntegerField()\n    b = make_field()()\n    c = models.TextField()\n",
        );
        assert_eq!(out.fields.keys().collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(
            out.issues,
            vec![FieldIssue::UnsupportedCallee {
                field: "b".into(),
                line: 3,
                expression: "make_field()".into(),
            }]
        );
    }

    #[test]
    fn test_relation_without_target_is_reported() {
        let out = extract("class A(models.Model):\n    owner = models.ForeignKey(on_delete=models.CASCADE)\n");
        assert!(out.fields.contains_key("owner"));
        assert!(matches!(
            out.issues.as_slice(),
            [FieldIssue::MissingRelationTarget { field, .. }] if field == "owner"
        ));
    }

    #[test]
    fn test_splat_is_never_a_relation_target() {
        let out = extract(
            "class A(models.Model):\n    owner = models.ForeignKey(**OWNER_KWARGS)\n    author = models.ForeignKey(*common, to=\"auth.User\")\n",
        );
        let owner = out.fields.get("owner").unwrap();
        assert_eq!(owner.relation_target, None);
        assert_eq!(owner.positional_args, vec![NormalizedValue::Opaque("**OWNER_KWARGS".into())]);
        assert_eq!(
            out.fields.get("author").unwrap().relation_target.as_deref(),
            Some("auth.User")
        );
        assert_eq!(
            out.issues,
            vec![FieldIssue::MissingRelationTarget {
                field: "owner".into(),
                line: 2,
                field_kind: "ForeignKey".into(),
            }]
        );
    }

    #[test]
    fn test_rebinding_keeps_last_position() {
        let out = extract(
            "class A(models.Model):\n    x = models.IntegerField()\n    y = models.IntegerField()\n    x = models.TextField()\n",
        );
        assert_eq!(out.fields.keys().collect::<Vec<_>>(), vec!["y", "x"]);
        assert_eq!(out.fields.get("x").unwrap().field_kind, "TextField");
    }
}
