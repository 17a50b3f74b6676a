//! Head-source wiring for component definitions.
//!
//! A component declares its head either as a static patch or as a function
//! producing one. Either way the definition owns a [`SharedHead`] that the
//! accessor will later populate; `resolve()` yields the record the renderer
//! should see right now, with reactive values winning over dynamic ones.

use std::sync::Arc;

use crate::reactive::SharedHead;
use crate::record::{HeadPatch, HeadRecord};
use crate::scope::ComponentScope;

type DynamicHead = Box<dyn Fn() -> HeadPatch + Send + Sync>;

/// How a component definition declares its head values.
pub enum HeadSource {
    /// Fixed values known at definition time.
    Static(HeadPatch),
    /// Re-evaluated on every resolve.
    Dynamic(DynamicHead),
}

/// The shared record plus the optional dynamic source behind it.
pub struct HeadOptions {
    shared: Arc<SharedHead>,
    dynamic: Option<DynamicHead>,
}

impl HeadOptions {
    pub fn new(source: HeadSource) -> Self {
        match source {
            HeadSource::Static(patch) => {
                let shared = Arc::new(SharedHead::new());
                shared.apply(patch);
                Self {
                    shared,
                    dynamic: None,
                }
            }
            HeadSource::Dynamic(head) => Self {
                shared: Arc::new(SharedHead::new()),
                dynamic: Some(head),
            },
        }
    }

    /// The shared record the accessor will populate.
    pub fn shared(&self) -> Arc<SharedHead> {
        Arc::clone(&self.shared)
    }

    /// Wire the shared record into a component scope.
    pub fn attach_to(&self, scope: &ComponentScope) {
        scope.attach_head(self.shared());
    }

    /// The record the renderer should consume now.
    ///
    /// Static sources resolve to the record itself. Dynamic sources are
    /// evaluated fresh and fill only the fields the record leaves
    /// empty/unset — reactive writes win.
    pub fn resolve(&self) -> HeadRecord {
        let snapshot = self.shared.snapshot();
        match &self.dynamic {
            None => snapshot,
            Some(head) => snapshot.with_defaults(head()),
        }
    }
}
