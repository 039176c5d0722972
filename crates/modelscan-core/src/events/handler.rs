//! ScanEventHandler trait with no-op defaults.

use super::types::*;

/// Trait for observing a scan.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait ScanEventHandler: Send + Sync {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}
    fn on_file_skipped(&self, _event: &FileSkippedEvent) {}
    fn on_model_discovered(&self, _event: &ModelDiscoveredEvent) {}
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}
}
