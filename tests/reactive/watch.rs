//! Tests for `WatcherSet`.

use std::sync::{Arc, Mutex};

use head_state::reactive::WatcherSet;
use head_state::HeadField;

/// Helper: create a shared call-log that watchers append to.
fn make_log() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

// ============================================================================
// Basic subscription
// ============================================================================

#[test]
fn watch_registers_and_notify_calls_with_the_field() {
    let watchers = WatcherSet::new();
    let log = make_log();
    let log_clone = Arc::clone(&log);

    watchers.watch(move |field| {
        log_clone.lock().unwrap().push(field.as_str().to_string());
    });

    watchers.notify(HeadField::Title);

    assert_eq!(*log.lock().unwrap(), vec!["title"]);
}

#[test]
fn notify_calls_watchers_in_registration_order() {
    let watchers = WatcherSet::new();
    let log = make_log();

    {
        let log = Arc::clone(&log);
        watchers.watch(move |f| log.lock().unwrap().push(format!("a:{f}")));
    }
    {
        let log = Arc::clone(&log);
        watchers.watch(move |f| log.lock().unwrap().push(format!("b:{f}")));
    }

    watchers.notify(HeadField::Meta);

    assert_eq!(*log.lock().unwrap(), vec!["a:meta", "b:meta"]);
}

// ============================================================================
// Unwatch
// ============================================================================

#[test]
fn unwatch_removes_the_watcher() {
    let watchers = WatcherSet::new();
    let log = make_log();
    let log_clone = Arc::clone(&log);

    let id = watchers.watch(move |f| log_clone.lock().unwrap().push(f.to_string()));
    watchers.unwatch(id);
    watchers.notify(HeadField::Title);

    assert!(
        log.lock().unwrap().is_empty(),
        "watcher should not fire after unwatch()"
    );
}

#[test]
fn double_unwatch_is_safe() {
    let watchers = WatcherSet::new();
    let id = watchers.watch(|_| {});
    watchers.unwatch(id);
    watchers.unwatch(id);
    watchers.notify(HeadField::Link);
}

#[test]
fn len_reflects_watcher_count() {
    let watchers = WatcherSet::new();
    assert!(watchers.is_empty());

    let id1 = watchers.watch(|_| {});
    let _id2 = watchers.watch(|_| {});
    assert_eq!(watchers.len(), 2);

    watchers.unwatch(id1);
    assert_eq!(watchers.len(), 1);
}

// ============================================================================
// Snapshot semantics during notify
// ============================================================================

#[test]
fn watcher_added_during_notify_is_not_called_in_current_round() {
    let watchers: Arc<WatcherSet> = Arc::new(WatcherSet::new());
    let log = make_log();

    {
        let watchers_clone = Arc::clone(&watchers);
        let log_clone = Arc::clone(&log);
        watchers.watch(move |_| {
            log_clone.lock().unwrap().push("first".to_string());
            let log2 = Arc::clone(&log_clone);
            watchers_clone.watch(move |_| log2.lock().unwrap().push("second".to_string()));
        });
    }

    watchers.notify(HeadField::Title);

    let log_guard = log.lock().unwrap();
    assert!(log_guard.contains(&"first".to_string()));
    assert!(
        !log_guard.contains(&"second".to_string()),
        "watcher added during notify should not fire in the same round"
    );
}

#[test]
fn watcher_removed_during_notify_still_fires_in_that_round() {
    let watchers: Arc<WatcherSet> = Arc::new(WatcherSet::new());
    let first_called = Arc::new(Mutex::new(false));

    let first_called_clone = Arc::clone(&first_called);
    let id1 = watchers.watch(move |_| {
        *first_called_clone.lock().unwrap() = true;
    });

    // Second watcher removes the first mid-round; the snapshot was taken
    // before any callback ran, so the first still fires this round.
    let watchers_clone = Arc::clone(&watchers);
    watchers.watch(move |_| {
        watchers_clone.unwatch(id1);
    });

    watchers.notify(HeadField::Title);
    assert!(*first_called.lock().unwrap());

    // After the round the first watcher is gone.
    *first_called.lock().unwrap() = false;
    watchers.notify(HeadField::Title);
    assert!(!*first_called.lock().unwrap());
}

#[test]
fn notify_with_no_watchers_is_a_no_op() {
    let watchers = WatcherSet::new();
    watchers.notify(HeadField::Script);
}
