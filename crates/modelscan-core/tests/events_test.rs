//! Tests for the scan event dispatcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use modelscan_core::events::*;

#[derive(Default)]
struct CountingHandler {
    models: AtomicUsize,
    completed: AtomicUsize,
}

impl ScanEventHandler for CountingHandler {
    fn on_model_discovered(&self, _event: &ModelDiscoveredEvent) {
        self.models.fetch_add(1, Ordering::SeqCst);
    }

    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}

struct PanickingHandler;

impl ScanEventHandler for PanickingHandler {
    fn on_model_discovered(&self, _event: &ModelDiscoveredEvent) {
        panic!("handler failure");
    }
}

fn model_event() -> ModelDiscoveredEvent {
    ModelDiscoveredEvent {
        name: "Post".into(),
        module_path: "blog/models.py".into(),
        is_abstract: false,
        field_count: 4,
    }
}

#[test]
fn test_empty_dispatcher_is_noop() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_model_discovered(&model_event());
}

#[test]
fn test_events_reach_every_handler() {
    let first = Arc::new(CountingHandler::default());
    let second = Arc::new(CountingHandler::default());

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(first.clone());
    dispatcher.register(second.clone());

    dispatcher.emit_model_discovered(&model_event());
    dispatcher.emit_scan_complete(&ScanCompleteEvent {
        files_scanned: 1,
        files_skipped: 0,
        models: 1,
        errors: 0,
        duration_ms: 0,
    });

    assert_eq!(first.models.load(Ordering::SeqCst), 1);
    assert_eq!(second.models.load(Ordering::SeqCst), 1);
    assert_eq!(second.completed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_panicking_handler_does_not_block_others() {
    let counter = Arc::new(CountingHandler::default());

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_model_discovered(&model_event());

    assert_eq!(counter.models.load(Ordering::SeqCst), 1);
}
