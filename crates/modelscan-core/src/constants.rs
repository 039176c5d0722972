//! Shared constants for the modelscan extractor.

/// Base class every model ultimately derives from, matched after stripping
/// module qualifiers (`models.Model` → `Model`).
pub const DEFAULT_ROOT_BASE_NAME: &str = "Model";

/// Meta option that marks a model as an abstract field mixin.
pub const DEFAULT_ABSTRACT_FLAG_NAME: &str = "abstract";

/// Name of the nested configuration class inside a model body.
pub const DEFAULT_META_CLASS_NAME: &str = "Meta";

/// Field constructors that denote a reference to another model.
pub const DEFAULT_RELATION_MARKERS: &[&str] = &["ForeignKey", "OneToOneField", "ManyToManyField"];

/// Keyword option holding the reverse accessor name of a relation.
pub const RELATED_NAME_OPTION: &str = "related_name";

/// Keyword option that may carry the relation target when no positional
/// argument is given (`ForeignKey(to="auth.User", ...)`).
pub const RELATION_TARGET_OPTION: &str = "to";

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "modelscan.toml";

/// Default export output path.
pub const DEFAULT_OUTPUT_PATH: &str = "models.yaml";

/// Environment variable read by `init_tracing` for log filtering.
pub const LOG_ENV_VAR: &str = "MODELSCAN_LOG";
