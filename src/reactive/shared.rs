//! SharedHead — the shared reactive head record.
//!
//! One `SharedHead` per component instance, shared by reference (`Arc`) with
//! the field handles and the refresh watcher. The record mutex is never held
//! while watcher callbacks run, so callbacks may re-enter any operation here.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::record::{HeadPatch, HeadRecord};
use crate::types::HeadField;

use super::watch::WatcherSet;
use super::Unsubscribe;

/// The shared mutable head record plus its change watchers.
pub struct SharedHead {
    record: Mutex<HeadRecord>,
    // Arc so unsubscribe closures can outlive borrows of `self`.
    watchers: Arc<WatcherSet>,
}

impl SharedHead {
    /// An empty shared record (the defensive-fallback construction path).
    pub fn new() -> Self {
        Self::from_record(HeadRecord::empty())
    }

    pub fn from_record(record: HeadRecord) -> Self {
        Self {
            record: Mutex::new(record),
            watchers: Arc::new(WatcherSet::new()),
        }
    }

    /// Clone of the current record state.
    pub fn snapshot(&self) -> HeadRecord {
        self.record.lock().clone()
    }

    /// Read under the record lock. `f` must not re-enter the record.
    pub fn read<R>(&self, f: impl FnOnce(&HeadRecord) -> R) -> R {
        f(&self.record.lock())
    }

    /// Mutate one field under the lock, then notify watchers for that field.
    pub fn write(&self, field: HeadField, mutate: impl FnOnce(&mut HeadRecord)) {
        {
            let mut record = self.record.lock();
            mutate(&mut record);
        }
        self.watchers.notify(field);
    }

    /// Overwrite the record with the default shape and notify every field.
    pub fn reset(&self) {
        {
            *self.record.lock() = HeadRecord::empty();
        }
        for field in HeadField::ALL {
            self.watchers.notify(field);
        }
    }

    /// Apply a patch field-by-field and notify the assigned fields.
    /// Returns the assigned fields.
    pub fn apply(&self, patch: HeadPatch) -> Vec<HeadField> {
        let assigned = { self.record.lock().apply(patch) };
        for field in &assigned {
            self.watchers.notify(*field);
        }
        assigned
    }

    /// Subscribe to every field change. The callback receives the field that
    /// changed. Returns an [`Unsubscribe`] closure; the subscription is never
    /// removed implicitly.
    pub fn on_change(&self, callback: impl Fn(HeadField) + Send + Sync + 'static) -> Unsubscribe {
        let id = self.watchers.watch(callback);
        let watchers = Arc::clone(&self.watchers);
        Box::new(move || watchers.unwatch(id))
    }

    /// Number of registered watchers (all fields).
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }
}

impl Default for SharedHead {
    fn default() -> Self {
        Self::new()
    }
}
