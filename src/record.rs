//! The head record — the shared mutable shape one component instance owns
//! and the tag renderer consumes.
//!
//! The record always contains every field of the default shape; optional
//! scalars hold an explicit `None` rather than being absent. Serialization
//! produces the renderer's JSON key names (camelCase, dunder sanitizer keys);
//! function-valued fields are excluded.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Attrs, HeadField, LifecycleHook, TagAttrs, TitleTemplate};

// ============================================================================
// HeadRecord
// ============================================================================

/// All page-head fields for one component instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_template: Option<TitleTemplate>,

    pub html_attrs: Attrs,
    pub head_attrs: Attrs,
    pub body_attrs: Attrs,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<TagAttrs>,

    pub meta: Vec<TagAttrs>,
    pub link: Vec<TagAttrs>,
    pub style: Vec<TagAttrs>,
    pub script: Vec<TagAttrs>,
    pub noscript: Vec<TagAttrs>,

    #[serde(rename = "__dangerouslyDisableSanitizers")]
    pub disabled_sanitizers: Vec<String>,
    #[serde(rename = "__dangerouslyDisableSanitizersByTagID")]
    pub disabled_sanitizers_by_tag: Map<String, Value>,

    #[serde(skip)]
    pub changed: Option<LifecycleHook>,
    #[serde(skip)]
    pub after_navigation: Option<LifecycleHook>,
}

impl HeadRecord {
    /// The default-record constructor: every known field pre-populated to its
    /// empty/neutral value. Pure, no errors.
    pub fn empty() -> Self {
        Self {
            title: None,
            title_template: None,
            html_attrs: Attrs::new(),
            head_attrs: Attrs::new(),
            body_attrs: Attrs::new(),
            base: None,
            meta: Vec::new(),
            link: Vec::new(),
            style: Vec::new(),
            script: Vec::new(),
            noscript: Vec::new(),
            disabled_sanitizers: Vec::new(),
            disabled_sanitizers_by_tag: Map::new(),
            changed: None,
            after_navigation: None,
        }
    }

    /// Write each override present in `patch` into the record, one field at a
    /// time. Returns the fields that were assigned so the reactive layer can
    /// notify per key. Override values are not validated.
    pub fn apply(&mut self, patch: HeadPatch) -> Vec<HeadField> {
        let mut assigned = Vec::new();

        if let Some(title) = patch.title {
            self.title = Some(title);
            assigned.push(HeadField::Title);
        }
        if let Some(template) = patch.title_template {
            self.title_template = Some(template);
            assigned.push(HeadField::TitleTemplate);
        }
        if let Some(attrs) = patch.html_attrs {
            self.html_attrs = attrs;
            assigned.push(HeadField::HtmlAttrs);
        }
        if let Some(attrs) = patch.head_attrs {
            self.head_attrs = attrs;
            assigned.push(HeadField::HeadAttrs);
        }
        if let Some(attrs) = patch.body_attrs {
            self.body_attrs = attrs;
            assigned.push(HeadField::BodyAttrs);
        }
        if let Some(base) = patch.base {
            self.base = Some(base);
            assigned.push(HeadField::Base);
        }
        if let Some(meta) = patch.meta {
            self.meta = meta;
            assigned.push(HeadField::Meta);
        }
        if let Some(link) = patch.link {
            self.link = link;
            assigned.push(HeadField::Link);
        }
        if let Some(style) = patch.style {
            self.style = style;
            assigned.push(HeadField::Style);
        }
        if let Some(script) = patch.script {
            self.script = script;
            assigned.push(HeadField::Script);
        }
        if let Some(noscript) = patch.noscript {
            self.noscript = noscript;
            assigned.push(HeadField::Noscript);
        }
        if let Some(sanitizers) = patch.disabled_sanitizers {
            self.disabled_sanitizers = sanitizers;
            assigned.push(HeadField::DisabledSanitizers);
        }
        if let Some(by_tag) = patch.disabled_sanitizers_by_tag {
            self.disabled_sanitizers_by_tag = by_tag;
            assigned.push(HeadField::DisabledSanitizersByTag);
        }
        if let Some(hook) = patch.changed {
            self.changed = Some(hook);
            assigned.push(HeadField::Changed);
        }
        if let Some(hook) = patch.after_navigation {
            self.after_navigation = Some(hook);
            assigned.push(HeadField::AfterNavigation);
        }

        assigned
    }

    /// Fill every empty/unset field from `fallback`. Record values win —
    /// used to resolve a dynamic head source against the reactive record.
    pub fn with_defaults(mut self, fallback: HeadPatch) -> Self {
        if self.title.is_none() {
            self.title = fallback.title;
        }
        if self.title_template.is_none() {
            self.title_template = fallback.title_template;
        }
        if self.html_attrs.is_empty() {
            if let Some(attrs) = fallback.html_attrs {
                self.html_attrs = attrs;
            }
        }
        if self.head_attrs.is_empty() {
            if let Some(attrs) = fallback.head_attrs {
                self.head_attrs = attrs;
            }
        }
        if self.body_attrs.is_empty() {
            if let Some(attrs) = fallback.body_attrs {
                self.body_attrs = attrs;
            }
        }
        if self.base.is_none() {
            self.base = fallback.base;
        }
        if self.meta.is_empty() {
            if let Some(meta) = fallback.meta {
                self.meta = meta;
            }
        }
        if self.link.is_empty() {
            if let Some(link) = fallback.link {
                self.link = link;
            }
        }
        if self.style.is_empty() {
            if let Some(style) = fallback.style {
                self.style = style;
            }
        }
        if self.script.is_empty() {
            if let Some(script) = fallback.script {
                self.script = script;
            }
        }
        if self.noscript.is_empty() {
            if let Some(noscript) = fallback.noscript {
                self.noscript = noscript;
            }
        }
        if self.disabled_sanitizers.is_empty() {
            if let Some(sanitizers) = fallback.disabled_sanitizers {
                self.disabled_sanitizers = sanitizers;
            }
        }
        if self.disabled_sanitizers_by_tag.is_empty() {
            if let Some(by_tag) = fallback.disabled_sanitizers_by_tag {
                self.disabled_sanitizers_by_tag = by_tag;
            }
        }
        if self.changed.is_none() {
            self.changed = fallback.changed;
        }
        if self.after_navigation.is_none() {
            self.after_navigation = fallback.after_navigation;
        }
        self
    }
}

impl Default for HeadRecord {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// HeadPatch
// ============================================================================

/// Partial set of field overrides. `None` means "leave the field alone".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_template: Option<TitleTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_attrs: Option<Attrs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_attrs: Option<Attrs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_attrs: Option<Attrs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<TagAttrs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Vec<TagAttrs>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<TagAttrs>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Vec<TagAttrs>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<Vec<TagAttrs>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noscript: Option<Vec<TagAttrs>>,

    #[serde(
        rename = "__dangerouslyDisableSanitizers",
        skip_serializing_if = "Option::is_none"
    )]
    pub disabled_sanitizers: Option<Vec<String>>,
    #[serde(
        rename = "__dangerouslyDisableSanitizersByTagID",
        skip_serializing_if = "Option::is_none"
    )]
    pub disabled_sanitizers_by_tag: Option<Map<String, Value>>,

    #[serde(skip)]
    pub changed: Option<LifecycleHook>,
    #[serde(skip)]
    pub after_navigation: Option<LifecycleHook>,
}

impl HeadPatch {
    /// True if no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Fields this patch overrides, in record declaration order.
    pub fn fields(&self) -> Vec<HeadField> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push(HeadField::Title);
        }
        if self.title_template.is_some() {
            fields.push(HeadField::TitleTemplate);
        }
        if self.html_attrs.is_some() {
            fields.push(HeadField::HtmlAttrs);
        }
        if self.head_attrs.is_some() {
            fields.push(HeadField::HeadAttrs);
        }
        if self.body_attrs.is_some() {
            fields.push(HeadField::BodyAttrs);
        }
        if self.base.is_some() {
            fields.push(HeadField::Base);
        }
        if self.meta.is_some() {
            fields.push(HeadField::Meta);
        }
        if self.link.is_some() {
            fields.push(HeadField::Link);
        }
        if self.style.is_some() {
            fields.push(HeadField::Style);
        }
        if self.script.is_some() {
            fields.push(HeadField::Script);
        }
        if self.noscript.is_some() {
            fields.push(HeadField::Noscript);
        }
        if self.disabled_sanitizers.is_some() {
            fields.push(HeadField::DisabledSanitizers);
        }
        if self.disabled_sanitizers_by_tag.is_some() {
            fields.push(HeadField::DisabledSanitizersByTag);
        }
        if self.changed.is_some() {
            fields.push(HeadField::Changed);
        }
        if self.after_navigation.is_some() {
            fields.push(HeadField::AfterNavigation);
        }
        fields
    }

    /// Field-level defaulting merge: `self` wins, `fallback` fills the gaps.
    pub fn or(mut self, fallback: HeadPatch) -> HeadPatch {
        self.title = self.title.or(fallback.title);
        self.title_template = self.title_template.or(fallback.title_template);
        self.html_attrs = self.html_attrs.or(fallback.html_attrs);
        self.head_attrs = self.head_attrs.or(fallback.head_attrs);
        self.body_attrs = self.body_attrs.or(fallback.body_attrs);
        self.base = self.base.or(fallback.base);
        self.meta = self.meta.or(fallback.meta);
        self.link = self.link.or(fallback.link);
        self.style = self.style.or(fallback.style);
        self.script = self.script.or(fallback.script);
        self.noscript = self.noscript.or(fallback.noscript);
        self.disabled_sanitizers = self.disabled_sanitizers.or(fallback.disabled_sanitizers);
        self.disabled_sanitizers_by_tag = self
            .disabled_sanitizers_by_tag
            .or(fallback.disabled_sanitizers_by_tag);
        self.changed = self.changed.or(fallback.changed);
        self.after_navigation = self.after_navigation.or(fallback.after_navigation);
        self
    }
}
