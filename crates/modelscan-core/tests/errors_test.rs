//! Tests for the modelscan error handling system.

use std::collections::HashSet;
use std::path::PathBuf;

use modelscan_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let parse = ParseError::Syntax {
        path: "app/models.py".into(),
        line: 3,
        column: 4,
        error_count: 1,
    };
    let extraction = ExtractionError::InheritanceCycle {
        path: "m.py".into(),
        class: "A".into(),
        base: "B".into(),
        line: 1,
    };
    let config = ConfigError::FileNotFound { path: "/tmp".into() };
    let export = ExportError::UnknownFormat("xml".into());
    let source = SourceError::InvalidUtf8 {
        path: PathBuf::from("x.py"),
    };

    let codes: HashSet<&str> = [
        parse.error_code(),
        extraction.error_code(),
        config.error_code(),
        export.error_code(),
        source.error_code(),
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 5, "each subsystem has its own code");
}

#[test]
fn test_display_string_prefixes_code() {
    let err = ExtractionError::UnsupportedExpression {
        path: "blog/models.py".into(),
        class: "Post".into(),
        field: "title".into(),
        line: 12,
        expression: "factory()".into(),
    };
    let rendered = err.display_string();
    assert!(rendered.starts_with("[UNSUPPORTED_EXPRESSION] "));
    assert!(rendered.contains("Post.title"));
}

#[test]
fn test_scan_error_delegates_code() {
    let err: ScanError = ParseError::GrammarLoad {
        message: "abi mismatch".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::GRAMMAR_ERROR);

    let err: ScanError = ParseError::NoTree { path: "a.py".into() }.into();
    assert_eq!(err.error_code(), error_code::PARSE_ERROR);
}

#[test]
fn test_scan_result_collects_non_fatal_errors() {
    let mut result: ScanResult<Vec<String>> = ScanResult::new(vec!["Post".into()]);
    assert!(result.is_clean());

    result.add_error(ParseError::NoTree { path: "b.py".into() });
    result.add_error(ExtractionError::InheritanceCycle {
        path: "m.py".into(),
        class: "A".into(),
        base: "B".into(),
        line: 1,
    });

    assert_eq!(result.error_count(), 2);
    assert_eq!(result.data, vec!["Post".to_string()]);
}

#[test]
fn test_parse_error_path() {
    let err = ParseError::Syntax {
        path: "a.py".into(),
        line: 1,
        column: 1,
        error_count: 2,
    };
    assert_eq!(err.path(), Some("a.py"));
    assert_eq!(ParseError::GrammarLoad { message: String::new() }.path(), None);
}
