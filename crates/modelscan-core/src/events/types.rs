//! Event payload types.

/// Payload for `on_scan_started`.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub file_count: usize,
}

/// Payload for `on_file_skipped`.
#[derive(Debug, Clone)]
pub struct FileSkippedEvent {
    pub path: String,
    pub error_code: &'static str,
    pub message: String,
}

/// Payload for `on_model_discovered`.
#[derive(Debug, Clone)]
pub struct ModelDiscoveredEvent {
    pub name: String,
    pub module_path: String,
    pub is_abstract: bool,
    pub field_count: usize,
}

/// Payload for `on_scan_complete`.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub models: usize,
    pub errors: usize,
    pub duration_ms: u64,
}
