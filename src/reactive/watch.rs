//! WatcherSet — field-change pub/sub for the shared head record.
//!
//! Watchers are stored as `Arc<dyn Fn(HeadField)>` so snapshots are cheap.
//! Snapshot-on-notify semantics mean:
//!   - A watcher removed *during* a notification round is still called in
//!     that round.
//!   - A watcher added *during* a round is NOT called until the next notify.
//!
//! All methods take `&self` (interior mutability via `parking_lot::Mutex`),
//! and the lock is never held while a watcher runs, so watchers may call
//! `watch()`/`unwatch()` or re-enter the record without deadlocking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::HeadField;

/// A watcher ID returned by [`WatcherSet::watch`], accepted by
/// [`WatcherSet::unwatch`].
pub type WatchId = u64;

type WatchFn = dyn Fn(HeadField) + Send + Sync;

struct Watcher {
    id: WatchId,
    callback: Arc<WatchFn>,
}

/// Synchronous pub/sub of field-change notifications.
#[derive(Default)]
pub struct WatcherSet {
    watchers: Mutex<Vec<Watcher>>,
    next_id: AtomicU64,
}

impl WatcherSet {
    pub fn new() -> Self {
        Self {
            watchers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register `callback` to run on every field-change notification.
    pub fn watch(&self, callback: impl Fn(HeadField) + Send + Sync + 'static) -> WatchId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.watchers.lock().push(Watcher {
            id,
            callback: Arc::new(callback),
        });
        id
    }

    /// Remove the watcher identified by `id`. Safe to call more than once.
    pub fn unwatch(&self, id: WatchId) {
        self.watchers.lock().retain(|w| w.id != id);
    }

    /// Notify all currently registered watchers that `field` changed.
    ///
    /// The watcher list is snapshotted under the lock and the lock released
    /// before any callback runs.
    pub fn notify(&self, field: HeadField) {
        let snapshot: Vec<Arc<WatchFn>> = {
            let guard = self.watchers.lock();
            guard.iter().map(|w| Arc::clone(&w.callback)).collect()
        };
        for callback in snapshot {
            callback(field);
        }
    }

    /// Number of registered watchers.
    pub fn len(&self) -> usize {
        self.watchers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
