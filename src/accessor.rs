//! The head accessor — [`use_head`] and the [`HeadRefs`] it returns.
//!
//! `use_head` resets the component's shared record to the default shape,
//! merges the caller's initial values, and hands back one [`FieldHandle`]
//! per field. In client mode it also wires the record to the scope's
//! renderer so any later write triggers a refresh.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{HeadError, Result};
use crate::reactive::{FieldHandle, SharedHead};
use crate::record::HeadPatch;
use crate::scope::{ComponentScope, RenderMode};
use crate::types::{Attrs, HeadField, LifecycleHook, TagAttrs, TitleTemplate};

// ============================================================================
// HeadRefs
// ============================================================================

/// One reactive handle per head record field, suitable for destructuring.
#[derive(Clone, Debug)]
pub struct HeadRefs {
    pub title: FieldHandle<Option<String>>,
    pub title_template: FieldHandle<Option<TitleTemplate>>,

    pub html_attrs: FieldHandle<Attrs>,
    pub head_attrs: FieldHandle<Attrs>,
    pub body_attrs: FieldHandle<Attrs>,

    pub base: FieldHandle<Option<TagAttrs>>,

    pub meta: FieldHandle<Vec<TagAttrs>>,
    pub link: FieldHandle<Vec<TagAttrs>>,
    pub style: FieldHandle<Vec<TagAttrs>>,
    pub script: FieldHandle<Vec<TagAttrs>>,
    pub noscript: FieldHandle<Vec<TagAttrs>>,

    pub disabled_sanitizers: FieldHandle<Vec<String>>,
    pub disabled_sanitizers_by_tag: FieldHandle<Map<String, Value>>,

    pub changed: FieldHandle<Option<LifecycleHook>>,
    pub after_navigation: FieldHandle<Option<LifecycleHook>>,
}

impl HeadRefs {
    /// Bind a handle to every field of `shared`.
    fn bind(shared: &Arc<SharedHead>) -> Self {
        Self {
            title: FieldHandle::new(
                Arc::clone(shared),
                HeadField::Title,
                |r| r.title.clone(),
                |r, v| r.title = v,
            ),
            title_template: FieldHandle::new(
                Arc::clone(shared),
                HeadField::TitleTemplate,
                |r| r.title_template.clone(),
                |r, v| r.title_template = v,
            ),
            html_attrs: FieldHandle::new(
                Arc::clone(shared),
                HeadField::HtmlAttrs,
                |r| r.html_attrs.clone(),
                |r, v| r.html_attrs = v,
            ),
            head_attrs: FieldHandle::new(
                Arc::clone(shared),
                HeadField::HeadAttrs,
                |r| r.head_attrs.clone(),
                |r, v| r.head_attrs = v,
            ),
            body_attrs: FieldHandle::new(
                Arc::clone(shared),
                HeadField::BodyAttrs,
                |r| r.body_attrs.clone(),
                |r, v| r.body_attrs = v,
            ),
            base: FieldHandle::new(
                Arc::clone(shared),
                HeadField::Base,
                |r| r.base.clone(),
                |r, v| r.base = v,
            ),
            meta: FieldHandle::new(
                Arc::clone(shared),
                HeadField::Meta,
                |r| r.meta.clone(),
                |r, v| r.meta = v,
            ),
            link: FieldHandle::new(
                Arc::clone(shared),
                HeadField::Link,
                |r| r.link.clone(),
                |r, v| r.link = v,
            ),
            style: FieldHandle::new(
                Arc::clone(shared),
                HeadField::Style,
                |r| r.style.clone(),
                |r, v| r.style = v,
            ),
            script: FieldHandle::new(
                Arc::clone(shared),
                HeadField::Script,
                |r| r.script.clone(),
                |r, v| r.script = v,
            ),
            noscript: FieldHandle::new(
                Arc::clone(shared),
                HeadField::Noscript,
                |r| r.noscript.clone(),
                |r, v| r.noscript = v,
            ),
            disabled_sanitizers: FieldHandle::new(
                Arc::clone(shared),
                HeadField::DisabledSanitizers,
                |r| r.disabled_sanitizers.clone(),
                |r, v| r.disabled_sanitizers = v,
            ),
            disabled_sanitizers_by_tag: FieldHandle::new(
                Arc::clone(shared),
                HeadField::DisabledSanitizersByTag,
                |r| r.disabled_sanitizers_by_tag.clone(),
                |r, v| r.disabled_sanitizers_by_tag = v,
            ),
            changed: FieldHandle::new(
                Arc::clone(shared),
                HeadField::Changed,
                |r| r.changed.clone(),
                |r, v| r.changed = v,
            ),
            after_navigation: FieldHandle::new(
                Arc::clone(shared),
                HeadField::AfterNavigation,
                |r| r.after_navigation.clone(),
                |r, v| r.after_navigation = v,
            ),
        }
    }
}

// ============================================================================
// use_head
// ============================================================================

/// Expose the scope's shared head record as individually reactive handles.
///
/// Must be called during the component's setup phase, on a scope whose head
/// slot was declared at definition time. The record is overwritten with the
/// default shape, then `init` values win field-by-field.
///
/// In [`RenderMode::Client`] a watcher over the whole record is registered
/// that calls the scope's renderer on every field change; one refresh fires
/// immediately to apply the initial values. The watcher lives as long as the
/// scope. In [`RenderMode::Server`] nothing is registered.
pub fn use_head(scope: &ComponentScope, init: Option<HeadPatch>) -> Result<HeadRefs> {
    if !scope.is_in_setup() {
        return Err(HeadError::OutsideSetup);
    }

    let shared = scope.head_slot()?;

    shared.reset();
    if let Some(patch) = init {
        shared.apply(patch);
    }

    let refs = HeadRefs::bind(&shared);

    if scope.mode() == RenderMode::Client {
        let renderer = scope.renderer();
        // Weak: the watcher is stored inside the record's own watcher set and
        // must not keep the record alive.
        let weak = Arc::downgrade(&shared);
        let guard = shared.on_change(move |field| {
            let Some(record) = weak.upgrade() else {
                return;
            };
            tracing::debug!(field = %field, "head field changed, refreshing");
            renderer.refresh(&record.snapshot());
        });
        scope.retain(guard);

        tracing::debug!("head refresh watcher registered");
        scope.renderer().refresh(&shared.snapshot());
    }

    Ok(refs)
}
