//! Reactive layer — synchronous subscriptions over the shared head record.
//!
//! # Overview
//!
//! [`SharedHead`] holds one [`HeadRecord`](crate::record::HeadRecord) behind a
//! mutex together with a [`WatcherSet`]. Every write through the reactive
//! layer notifies watchers synchronously, keyed by the
//! [`HeadField`](crate::types::HeadField) that changed. [`FieldHandle`] binds
//! one field to a `get` / `set` / `subscribe` cell.
//!
//! # Modules
//!
//! - [`watch`] — [`WatcherSet`] field-change pub/sub.
//! - [`shared`] — [`SharedHead`] shared reactive record.
//! - [`cell`] — [`FieldHandle<T>`] typed per-field cells.

pub mod cell;
pub mod shared;
pub mod watch;

pub use cell::FieldHandle;
pub use shared::SharedHead;
pub use watch::{WatchId, WatcherSet};

/// An owned one-shot closure that removes a subscription when called.
pub type Unsubscribe = Box<dyn FnOnce() + Send + Sync>;
