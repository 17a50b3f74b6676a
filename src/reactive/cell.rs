//! FieldHandle<T> — an individually reactive read/write cell bound to exactly
//! one field of a [`SharedHead`].
//!
//! Handles are built from a statically-known accessor pair (no reflection
//! over record keys). `get` returns a clone of the current value, `set`
//! mutates the record in place and notifies watchers for the bound field,
//! `subscribe` fires only when that field changes.

use std::fmt;
use std::sync::Arc;

use crate::record::HeadRecord;
use crate::types::HeadField;

use super::shared::SharedHead;
use super::Unsubscribe;

/// Typed read/write cell over one head record field.
pub struct FieldHandle<T> {
    shared: Arc<SharedHead>,
    field: HeadField,
    read: fn(&HeadRecord) -> T,
    write: fn(&mut HeadRecord, T),
}

impl<T> FieldHandle<T> {
    pub(crate) fn new(
        shared: Arc<SharedHead>,
        field: HeadField,
        read: fn(&HeadRecord) -> T,
        write: fn(&mut HeadRecord, T),
    ) -> Self {
        Self {
            shared,
            field,
            read,
            write,
        }
    }

    /// The field this handle is bound to.
    pub fn field(&self) -> HeadField {
        self.field
    }

    /// Current value of the field (cloned out of the record).
    pub fn get(&self) -> T {
        self.shared.read(|record| (self.read)(record))
    }

    /// Write `value` into the record and notify watchers of this field.
    ///
    /// Uniform for every field, including `titleTemplate`: the record always
    /// contains the field, so the first write needs no key registration.
    pub fn set(&self, value: T) {
        let write = self.write;
        self.shared.write(self.field, move |record| write(record, value));
    }

    /// Read-modify-write convenience. The mutation runs on a clone; watchers
    /// are notified once, after the write.
    pub fn update(&self, mutate: impl FnOnce(&mut T))
    where
        T: Clone,
    {
        let mut value = self.get();
        mutate(&mut value);
        self.set(value);
    }

    /// Run `callback` with the new value whenever this field changes.
    ///
    /// Returns an [`Unsubscribe`] closure. The callback holds only a weak
    /// reference to the record, so a live subscription cannot keep the
    /// record alive.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Unsubscribe
    where
        T: 'static,
    {
        let field = self.field;
        let read = self.read;
        let weak = Arc::downgrade(&self.shared);
        self.shared.on_change(move |changed| {
            if changed != field {
                return;
            }
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let value = shared.read(|record| read(record));
            callback(&value);
        })
    }
}

impl<T> Clone for FieldHandle<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            field: self.field,
            read: self.read,
            write: self.write,
        }
    }
}

impl<T> fmt::Debug for FieldHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldHandle")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}
