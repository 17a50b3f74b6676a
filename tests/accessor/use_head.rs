//! Tests for `use_head` — guards, defaulting, and refresh wiring.

use std::sync::{Arc, Mutex};

use head_state::{
    use_head, ComponentScope, HeadError, HeadPatch, HeadRecord, HeadRenderer, RenderMode,
};
use serde_json::json;

/// Renderer that records every refresh snapshot.
#[derive(Default)]
struct RecordingRenderer {
    calls: Mutex<Vec<HeadRecord>>,
}

impl RecordingRenderer {
    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn last_snapshot(&self) -> HeadRecord {
        self.calls.lock().unwrap().last().cloned().expect("no refresh recorded")
    }
}

impl HeadRenderer for RecordingRenderer {
    fn refresh(&self, snapshot: &HeadRecord) {
        self.calls.lock().unwrap().push(snapshot.clone());
    }
}

fn scope_with(mode: RenderMode) -> (ComponentScope, Arc<RecordingRenderer>) {
    let renderer = Arc::new(RecordingRenderer::default());
    let scope = ComponentScope::with_head_slot(mode, renderer.clone());
    (scope, renderer)
}

// ============================================================================
// Guards
// ============================================================================

#[test]
fn fails_outside_the_setup_phase() {
    let (scope, _renderer) = scope_with(RenderMode::Client);
    scope.finish_setup();

    let err = use_head(&scope, None).unwrap_err();
    assert_eq!(err, HeadError::OutsideSetup);
}

#[test]
fn fails_when_the_head_slot_was_never_declared() {
    let renderer = Arc::new(RecordingRenderer::default());
    let scope = ComponentScope::new(RenderMode::Client, renderer);

    let err = use_head(&scope, None).unwrap_err();
    assert_eq!(err, HeadError::UndeclaredHeadSlot);
}

// ============================================================================
// Defaults and initial values
// ============================================================================

#[test]
fn no_init_yields_handles_holding_every_default() {
    let (scope, _renderer) = scope_with(RenderMode::Server);
    let refs = use_head(&scope, None).unwrap();

    assert!(refs.title.get().is_none());
    assert!(refs.title_template.get().is_none());
    assert!(refs.html_attrs.get().is_empty());
    assert!(refs.head_attrs.get().is_empty());
    assert!(refs.body_attrs.get().is_empty());
    assert!(refs.base.get().is_none());
    assert!(refs.meta.get().is_empty());
    assert!(refs.link.get().is_empty());
    assert!(refs.style.get().is_empty());
    assert!(refs.script.get().is_empty());
    assert!(refs.noscript.get().is_empty());
    assert!(refs.disabled_sanitizers.get().is_empty());
    assert!(refs.disabled_sanitizers_by_tag.get().is_empty());
    assert!(refs.changed.get().is_none());
    assert!(refs.after_navigation.get().is_none());
}

#[test]
fn init_values_win_over_defaults_field_by_field() {
    let (scope, _renderer) = scope_with(RenderMode::Server);
    let init = HeadPatch {
        title: Some("Initial".to_string()),
        meta: Some(vec![[("charset".to_string(), json!("utf-8"))]
            .into_iter()
            .collect()]),
        ..Default::default()
    };

    let refs = use_head(&scope, Some(init)).unwrap();

    assert_eq!(refs.title.get().as_deref(), Some("Initial"));
    assert_eq!(refs.meta.get().len(), 1);
    // Fields absent from the init patch hold the default.
    assert!(refs.link.get().is_empty());
    assert!(refs.base.get().is_none());
}

#[test]
fn reinvocation_resets_stale_record_state() {
    let (scope, _renderer) = scope_with(RenderMode::Server);

    let refs = use_head(&scope, None).unwrap();
    refs.title.set(Some("stale".to_string()));

    // A fresh activation overwrites with the default shape first.
    let refs = use_head(&scope, None).unwrap();
    assert!(refs.title.get().is_none());
}

#[test]
fn attaches_a_record_when_wiring_supplied_none() {
    let (scope, _renderer) = scope_with(RenderMode::Server);
    assert!(scope.head().is_none(), "declared slot starts empty");

    use_head(&scope, None).unwrap();
    assert!(scope.head().is_some(), "fallback record attached");
}

// ============================================================================
// Client-mode refresh wiring
// ============================================================================

#[test]
fn client_mode_refreshes_immediately_with_initial_values() {
    let (scope, renderer) = scope_with(RenderMode::Client);
    let init = HeadPatch {
        title: Some("Immediate".to_string()),
        ..Default::default()
    };

    use_head(&scope, Some(init)).unwrap();

    assert!(renderer.call_count() >= 1, "no immediate refresh");
    assert_eq!(
        renderer.last_snapshot().title.as_deref(),
        Some("Immediate")
    );
}

#[test]
fn client_mode_refreshes_after_any_handle_write() {
    let (scope, renderer) = scope_with(RenderMode::Client);
    let refs = use_head(&scope, None).unwrap();
    let after_setup = renderer.call_count();

    refs.title.set(Some("Changed".to_string()));

    assert!(renderer.call_count() > after_setup, "write did not refresh");
    assert_eq!(renderer.last_snapshot().title.as_deref(), Some("Changed"));
}

#[test]
fn client_mode_retains_the_watcher_for_the_scope_lifetime() {
    let (scope, _renderer) = scope_with(RenderMode::Client);
    use_head(&scope, None).unwrap();
    assert_eq!(scope.retained_watchers(), 1);
}

// ============================================================================
// Server-mode: snapshot only
// ============================================================================

#[test]
fn server_mode_registers_no_refresh_watcher() {
    let (scope, renderer) = scope_with(RenderMode::Server);
    let refs = use_head(&scope, None).unwrap();

    refs.title.set(Some("Server".to_string()));
    refs.meta.set(vec![]);

    assert_eq!(renderer.call_count(), 0);
    assert_eq!(scope.retained_watchers(), 0);

    // The data snapshot is still fully usable.
    let shared = scope.head().unwrap();
    assert_eq!(shared.snapshot().title.as_deref(), Some("Server"));
}
