//! ComponentScope — explicit owning context for the head accessor.
//!
//! Replaces ambient current-instance discovery: the component (or the
//! framework glue around it) constructs a scope, declares the head slot at
//! definition time, and passes the scope into [`use_head`].
//!
//! The scope also owns the refresh-watcher guards registered by the
//! accessor. They are dropped with the scope, never unsubscribed explicitly.
//!
//! [`use_head`]: crate::accessor::use_head

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{HeadError, Result};
use crate::reactive::{SharedHead, Unsubscribe};
use crate::record::HeadRecord;

// ============================================================================
// RenderMode
// ============================================================================

/// Execution context of the current render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Rendering side effects are visible — the accessor registers a refresh
    /// watcher.
    Client,
    /// Snapshot-only server pass — no watcher is registered.
    Server,
}

// ============================================================================
// HeadRenderer
// ============================================================================

/// The host's "refresh rendered metadata" operation.
///
/// Called with a snapshot of the record after any watched change (and once
/// immediately on registration). What happens to the snapshot — diffing,
/// sanitizing, writing document head elements — is the renderer's business.
pub trait HeadRenderer: Send + Sync {
    fn refresh(&self, snapshot: &HeadRecord);
}

impl<F> HeadRenderer for F
where
    F: Fn(&HeadRecord) + Send + Sync,
{
    fn refresh(&self, snapshot: &HeadRecord) {
        self(snapshot)
    }
}

// ============================================================================
// ComponentScope
// ============================================================================

enum SlotState {
    /// The component definition never declared a head slot — accessor errors.
    Undeclared,
    /// Empty placeholder declared (the `head: {}` integration contract);
    /// the accessor attaches a fresh record on first use.
    Declared,
    /// Shared record present.
    Attached(Arc<SharedHead>),
}

/// Owning context for one component instance.
pub struct ComponentScope {
    mode: RenderMode,
    renderer: Arc<dyn HeadRenderer>,
    slot: Mutex<SlotState>,
    in_setup: AtomicBool,
    guards: Mutex<Vec<Unsubscribe>>,
}

impl ComponentScope {
    /// A scope in its setup phase, with no head slot declared.
    pub fn new(mode: RenderMode, renderer: Arc<dyn HeadRenderer>) -> Self {
        Self {
            mode,
            renderer,
            slot: Mutex::new(SlotState::Undeclared),
            in_setup: AtomicBool::new(true),
            guards: Mutex::new(Vec::new()),
        }
    }

    /// A scope with the head slot already declared.
    pub fn with_head_slot(mode: RenderMode, renderer: Arc<dyn HeadRenderer>) -> Self {
        let scope = Self::new(mode, renderer);
        scope.declare_head();
        scope
    }

    /// Declare the empty head slot. Idempotent; does not replace an attached
    /// record.
    pub fn declare_head(&self) {
        let mut slot = self.slot.lock();
        if matches!(*slot, SlotState::Undeclared) {
            *slot = SlotState::Declared;
        }
    }

    /// Attach a shared record supplied by framework wiring (the primary
    /// path). Implies declaration.
    pub fn attach_head(&self, shared: Arc<SharedHead>) {
        *self.slot.lock() = SlotState::Attached(shared);
    }

    /// The attached shared record, if any.
    pub fn head(&self) -> Option<Arc<SharedHead>> {
        match &*self.slot.lock() {
            SlotState::Attached(shared) => Some(Arc::clone(shared)),
            _ => None,
        }
    }

    /// Resolve the head slot for the accessor.
    ///
    /// Errors on an undeclared slot. A declared-but-empty slot gets a fresh
    /// empty record attached (defensive fallback when framework wiring did
    /// not supply one).
    pub(crate) fn head_slot(&self) -> Result<Arc<SharedHead>> {
        let mut slot = self.slot.lock();
        match &*slot {
            SlotState::Undeclared => Err(HeadError::UndeclaredHeadSlot),
            SlotState::Declared => {
                let shared = Arc::new(SharedHead::new());
                *slot = SlotState::Attached(Arc::clone(&shared));
                Ok(shared)
            }
            SlotState::Attached(shared) => Ok(Arc::clone(shared)),
        }
    }

    /// Leave the setup phase. The accessor refuses to run after this.
    pub fn finish_setup(&self) {
        self.in_setup.store(false, Ordering::Release);
    }

    pub fn is_in_setup(&self) -> bool {
        self.in_setup.load(Ordering::Acquire)
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn renderer(&self) -> Arc<dyn HeadRenderer> {
        Arc::clone(&self.renderer)
    }

    /// Keep a watcher guard alive for the lifetime of this scope.
    pub(crate) fn retain(&self, guard: Unsubscribe) {
        self.guards.lock().push(guard);
    }

    /// Number of watcher guards this scope is keeping alive.
    pub fn retained_watchers(&self) -> usize {
        self.guards.lock().len()
    }
}
