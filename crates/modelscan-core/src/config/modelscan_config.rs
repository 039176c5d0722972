//! Top-level modelscan configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ExportConfig, ExportFormat, ExtractionConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Project config (`modelscan.toml` in the project root)
/// 3. Compiled defaults
///
/// Environment variables never influence extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelScanConfig {
    pub extraction: ExtractionConfig,
    pub export: ExportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub root_base_name: Option<String>,
    pub relation_markers: Vec<String>,
    pub export_format: Option<ExportFormat>,
    pub output_path: Option<String>,
}

impl ModelScanConfig {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ModelScanConfig) -> Result<(), ConfigError> {
        let extraction = &config.extraction;
        for (field, value) in [
            ("extraction.abstract_flag_name", &extraction.abstract_flag_name),
            ("extraction.root_base_name", &extraction.root_base_name),
            ("extraction.meta_class_name", &extraction.meta_class_name),
        ] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if extraction.relation_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "extraction.relation_markers".to_string(),
                message: "markers must not be blank".to_string(),
            });
        }
        if matches!(&config.export.output_path, Some(p) if p.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "export.output_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ModelScanConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ModelScanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut ModelScanConfig, other: &ModelScanConfig) {
        // Extraction
        if !other.extraction.relation_markers.is_empty() {
            base.extraction.relation_markers = other.extraction.relation_markers.clone();
        }
        if other.extraction.abstract_flag_name.is_some() {
            base.extraction.abstract_flag_name = other.extraction.abstract_flag_name.clone();
        }
        if other.extraction.root_base_name.is_some() {
            base.extraction.root_base_name = other.extraction.root_base_name.clone();
        }
        if other.extraction.meta_class_name.is_some() {
            base.extraction.meta_class_name = other.extraction.meta_class_name.clone();
        }

        // Export
        if other.export.format.is_some() {
            base.export.format = other.export.format;
        }
        if other.export.output_path.is_some() {
            base.export.output_path = other.export.output_path.clone();
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ModelScanConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.root_base_name {
            config.extraction.root_base_name = Some(v.clone());
        }
        if !cli.relation_markers.is_empty() {
            config.extraction.relation_markers = cli.relation_markers.clone();
        }
        if let Some(v) = cli.export_format {
            config.export.format = Some(v);
        }
        if let Some(ref v) = cli.output_path {
            config.export.output_path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
