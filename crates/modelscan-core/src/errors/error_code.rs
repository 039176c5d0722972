//! ModelScanErrorCode trait: stable string codes for host runtimes.

/// Every error enum implements this to provide a structured code string
/// that a host runtime can filter on without matching display text.
pub trait ModelScanErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const GRAMMAR_ERROR: &str = "GRAMMAR_ERROR";
pub const UNSUPPORTED_EXPRESSION: &str = "UNSUPPORTED_EXPRESSION";
pub const INHERITANCE_CYCLE: &str = "INHERITANCE_CYCLE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const SOURCE_ERROR: &str = "SOURCE_ERROR";
