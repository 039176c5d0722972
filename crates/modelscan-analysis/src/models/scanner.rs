//! Two-phase schema scan over an enumerated file set.
//!
//! Phase 1 parses every file and records class headers, then classifies them
//! to a fixed point. Phase 2 walks each model class body against the frozen
//! classification, extracts own fields and `Meta` options, and finally folds
//! abstract-base fields into descendants. Every failure is scoped to one file
//! or one field; the scan always completes.

use std::time::Instant;

use modelscan_core::config::{ExtractionConfig, ModelScanConfig};
use modelscan_core::errors::error_code::{self, ModelScanErrorCode};
use modelscan_core::errors::{ExtractionError, ParseError, ScanResult};
use modelscan_core::events::{
    EventDispatcher, FileSkippedEvent, ModelDiscoveredEvent, ScanCompleteEvent, ScanStartedEvent,
};

use super::classifier::{ModelClassifier, ModelRegistry};
use super::diagnostics::{Diagnostic, DiagnosticPayload, Location, Severity};
use super::fields::{FieldExtractor, FieldIssue};
use super::inheritance::InheritanceResolver;
use super::meta::MetaOptionsExtractor;
use super::types::{ClassHeader, ExtractedModel, ModelDefinition};
use crate::parsers::{PythonParser, SourceFile, SyntaxTree};

/// Everything a scan produced.
#[derive(Debug, Clone, Default)]
pub struct SchemaScan {
    /// Models in file-then-declaration order.
    pub models: Vec<ModelDefinition>,
    pub diagnostics: Vec<Diagnostic>,
}

impl SchemaScan {
    pub fn model(&self, name: &str) -> Option<&ModelDefinition> {
        self.models.iter().find(|m| m.name == name)
    }
}

/// Schema assembler: the entry point a host runtime calls with its file list.
#[derive(Debug, Clone, Default)]
pub struct ModelScanner {
    config: ExtractionConfig,
    dispatcher: EventDispatcher,
}

impl ModelScanner {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            config,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Build from a loaded project configuration.
    pub fn from_config(config: &ModelScanConfig) -> Self {
        Self::new(config.extraction.clone())
    }

    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Scan `files` in the given order. Each call starts from empty state.
    pub fn scan(&self, files: &[SourceFile]) -> ScanResult<SchemaScan> {
        let start = Instant::now();
        let mut result = ScanResult::new(SchemaScan::default());
        self.dispatcher.emit_scan_started(&ScanStartedEvent {
            file_count: files.len(),
        });

        let mut parser = match PythonParser::new() {
            Ok(parser) => parser,
            Err(e) => {
                tracing::error!(error = %e, "cannot initialize parser");
                for file in files {
                    self.skip_file(&mut result, file, e.clone());
                }
                self.finish(&mut result, files.len(), start);
                return result;
            }
        };

        // Phase 1: parse and collect headers.
        let mut trees: Vec<SyntaxTree> = Vec::with_capacity(files.len());
        let mut headers: Vec<Vec<ClassHeader>> = Vec::with_capacity(files.len());
        for file in files {
            match parser.parse(file) {
                Ok(tree) => {
                    let file_headers: Vec<ClassHeader> = tree
                        .classes()
                        .map(|class| ClassHeader {
                            name: class.name().to_string(),
                            module_path: file.path.clone(),
                            base_names: class.base_names().into_iter().map(String::from).collect(),
                            line: class.line(),
                        })
                        .collect();
                    tracing::debug!(path = %file.path, classes = file_headers.len(), "parsed");
                    headers.push(file_headers);
                    trees.push(tree);
                }
                Err(e) => self.skip_file(&mut result, file, e),
            }
        }

        let all_headers: Vec<ClassHeader> = headers.iter().flatten().cloned().collect();
        let registry = ModelClassifier::new(&self.config).classify(&all_headers);
        tracing::debug!(
            classes = all_headers.len(),
            known = registry.len(),
            "classification frozen"
        );

        // Phase 2: extract against the frozen registry.
        let extracted = self.extract_models(&trees, &headers, &registry, &mut result);

        let outcome = InheritanceResolver::new(&extracted).resolve();
        for error in outcome.errors {
            if let ExtractionError::InheritanceCycle { path, line, .. } = &error {
                result.data.diagnostics.push(Diagnostic::warning(
                    Location::new(path.clone(), *line, 1),
                    error.error_code(),
                    error.to_string(),
                ));
            }
            result.add_error(error);
        }

        let mut models: Vec<ModelDefinition> = Vec::with_capacity(extracted.len());
        for (model, fields) in extracted.into_iter().zip(outcome.fields) {
            models.push(ModelDefinition {
                name: model.header.name,
                module_path: model.header.module_path,
                base_names: model.header.base_names,
                is_abstract: model.is_abstract,
                fields,
                meta_options: model.meta_options,
                line: model.header.line,
            });
        }

        for model in &models {
            self.dispatcher.emit_model_discovered(&ModelDiscoveredEvent {
                name: model.name.clone(),
                module_path: model.module_path.clone(),
                is_abstract: model.is_abstract,
                field_count: model.fields.len(),
            });
            result.data.diagnostics.push(Diagnostic::model(model));
        }

        for conflict in outcome.conflicts {
            let model = &models[conflict.model_index];
            result.data.diagnostics.push(Diagnostic {
                location: Location::new(model.module_path.clone(), model.line, 1),
                severity: Severity::Info,
                code: Diagnostic::FIELD_CONFLICT,
                message: format!(
                    "field {} of {} is declared by several abstract bases; {} wins",
                    conflict.field, conflict.model, conflict.winning_base
                ),
                payload: DiagnosticPayload::Field {
                    model: conflict.model,
                    field: conflict.field,
                    spec: conflict.winner,
                },
            });
        }

        result.data.models = models;
        self.finish(&mut result, files.len(), start);
        result
    }

    fn extract_models(
        &self,
        trees: &[SyntaxTree],
        headers: &[Vec<ClassHeader>],
        registry: &ModelRegistry,
        result: &mut ScanResult<SchemaScan>,
    ) -> Vec<ExtractedModel> {
        let fields = FieldExtractor::new(&self.config);
        let meta = MetaOptionsExtractor::new(&self.config);
        let mut extracted = Vec::new();

        for (tree, file_headers) in trees.iter().zip(headers) {
            for (class, header) in tree.classes().zip(file_headers) {
                if !registry.is_model(header) {
                    continue;
                }

                let meta_options = meta.extract(&class);
                let is_abstract = meta.is_abstract(&meta_options);
                let class_fields = fields.extract(&class);
                tracing::debug!(
                    class = %header.name,
                    path = %header.module_path,
                    fields = class_fields.fields.len(),
                    is_abstract,
                    "extracted model"
                );

                for issue in class_fields.issues {
                    self.report_field_issue(result, header, issue);
                }

                extracted.push(ExtractedModel {
                    header: header.clone(),
                    is_abstract,
                    fields: class_fields.fields,
                    meta_options,
                });
            }
        }
        extracted
    }

    fn report_field_issue(
        &self,
        result: &mut ScanResult<SchemaScan>,
        header: &ClassHeader,
        issue: FieldIssue,
    ) {
        match issue {
            FieldIssue::UnsupportedCallee {
                field,
                line,
                expression,
            } => {
                let error = ExtractionError::UnsupportedExpression {
                    path: header.module_path.clone(),
                    class: header.name.clone(),
                    field,
                    line,
                    expression,
                };
                result.data.diagnostics.push(Diagnostic::warning(
                    Location::new(header.module_path.clone(), line, 1),
                    error.error_code(),
                    error.to_string(),
                ));
                result.add_error(error);
            }
            FieldIssue::MissingRelationTarget {
                field,
                line,
                field_kind,
            } => {
                result.data.diagnostics.push(Diagnostic::warning(
                    Location::new(header.module_path.clone(), line, 1),
                    Diagnostic::MISSING_RELATION_TARGET,
                    format!("{} {}.{} has no target", field_kind, header.name, field),
                ));
            }
        }
    }

    fn skip_file(&self, result: &mut ScanResult<SchemaScan>, file: &SourceFile, error: ParseError) {
        tracing::warn!(path = %file.path, error = %error, "skipping file");
        let (line, column) = match &error {
            ParseError::Syntax { line, column, .. } => (*line, *column),
            _ => (1, 1),
        };
        self.dispatcher.emit_file_skipped(&FileSkippedEvent {
            path: file.path.clone(),
            error_code: error.error_code(),
            message: error.to_string(),
        });
        result.data.diagnostics.push(Diagnostic::error(
            Location::new(file.path.clone(), line, column),
            error.error_code(),
            error.to_string(),
        ));
        result.add_error(error);
    }

    fn finish(&self, result: &mut ScanResult<SchemaScan>, file_count: usize, start: Instant) {
        let files_skipped = result
            .errors
            .iter()
            .filter(|e| matches!(e.error_code(), error_code::PARSE_ERROR | error_code::GRAMMAR_ERROR))
            .count();
        let event = ScanCompleteEvent {
            files_scanned: file_count - files_skipped.min(file_count),
            files_skipped,
            models: result.data.models.len(),
            errors: result.error_count(),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        tracing::info!(
            files = event.files_scanned,
            skipped = event.files_skipped,
            models = event.models,
            errors = event.errors,
            "schema scan complete"
        );
        self.dispatcher.emit_scan_complete(&event);
    }
}
