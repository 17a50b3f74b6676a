use std::fmt;
use std::sync::Arc;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::record::HeadRecord;

/// Attribute map for a tag group (`htmlAttrs`, `headAttrs`, `bodyAttrs`):
/// attribute name → value.
pub type Attrs = Map<String, Value>;

/// One rendered tag entry (a `<meta>`, `<link>`, `<style>`, `<script>` or
/// `<noscript>` element): attribute name → value.
pub type TagAttrs = Map<String, Value>;

// ---------------------------------------------------------------------------
// HeadField
// ---------------------------------------------------------------------------

/// The statically-known set of head record fields.
///
/// Every field of [`HeadRecord`] has exactly one `HeadField` value; change
/// notifications are keyed by it. `as_str` returns the wire name the external
/// tag renderer uses for the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadField {
    Title,
    TitleTemplate,
    HtmlAttrs,
    HeadAttrs,
    BodyAttrs,
    Base,
    Meta,
    Link,
    Style,
    Script,
    Noscript,
    DisabledSanitizers,
    DisabledSanitizersByTag,
    Changed,
    AfterNavigation,
}

impl HeadField {
    /// Every field, in record declaration order.
    pub const ALL: [HeadField; 15] = [
        HeadField::Title,
        HeadField::TitleTemplate,
        HeadField::HtmlAttrs,
        HeadField::HeadAttrs,
        HeadField::BodyAttrs,
        HeadField::Base,
        HeadField::Meta,
        HeadField::Link,
        HeadField::Style,
        HeadField::Script,
        HeadField::Noscript,
        HeadField::DisabledSanitizers,
        HeadField::DisabledSanitizersByTag,
        HeadField::Changed,
        HeadField::AfterNavigation,
    ];

    /// The renderer-facing key name for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            HeadField::Title => "title",
            HeadField::TitleTemplate => "titleTemplate",
            HeadField::HtmlAttrs => "htmlAttrs",
            HeadField::HeadAttrs => "headAttrs",
            HeadField::BodyAttrs => "bodyAttrs",
            HeadField::Base => "base",
            HeadField::Meta => "meta",
            HeadField::Link => "link",
            HeadField::Style => "style",
            HeadField::Script => "script",
            HeadField::Noscript => "noscript",
            HeadField::DisabledSanitizers => "__dangerouslyDisableSanitizers",
            HeadField::DisabledSanitizersByTag => "__dangerouslyDisableSanitizersByTagID",
            HeadField::Changed => "changed",
            HeadField::AfterNavigation => "afterNavigation",
        }
    }
}

impl fmt::Display for HeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TitleTemplate
// ---------------------------------------------------------------------------

/// Title template — either a string with a `%s` placeholder or a
/// string-producing function.
#[derive(Clone)]
pub enum TitleTemplate {
    /// `"%s — My Site"` style template. `%s` is replaced with the page title.
    Template(String),
    /// Callback receiving the page title and returning the full document title.
    Resolver(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl TitleTemplate {
    /// Build the full document title from the page title.
    pub fn resolve(&self, title: &str) -> String {
        match self {
            TitleTemplate::Template(template) => template.replace("%s", title),
            TitleTemplate::Resolver(resolver) => resolver(title),
        }
    }
}

impl fmt::Debug for TitleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleTemplate::Template(template) => {
                f.debug_tuple("Template").field(template).finish()
            }
            TitleTemplate::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl PartialEq for TitleTemplate {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TitleTemplate::Template(a), TitleTemplate::Template(b)) => a == b,
            (TitleTemplate::Resolver(a), TitleTemplate::Resolver(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for TitleTemplate {
    fn from(template: &str) -> Self {
        TitleTemplate::Template(template.to_string())
    }
}

impl From<String> for TitleTemplate {
    fn from(template: String) -> Self {
        TitleTemplate::Template(template)
    }
}

/// Template variants serialize as the plain template string; resolver
/// functions have no wire representation and serialize as null.
impl Serialize for TitleTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TitleTemplate::Template(template) => serializer.serialize_str(template),
            TitleTemplate::Resolver(_) => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for TitleTemplate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let template = String::deserialize(deserializer)?;
        Ok(TitleTemplate::Template(template))
    }
}

// ---------------------------------------------------------------------------
// LifecycleHook
// ---------------------------------------------------------------------------

/// Cloneable callback handle for the `changed` / `afterNavigation` record
/// fields. The crate only stores and exposes these; invoking them is the tag
/// renderer's job.
#[derive(Clone)]
pub struct LifecycleHook(Arc<dyn Fn(&HeadRecord) + Send + Sync>);

impl LifecycleHook {
    pub fn new(hook: impl Fn(&HeadRecord) + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    /// Invoke the hook with the current record snapshot.
    pub fn call(&self, record: &HeadRecord) {
        (self.0)(record)
    }
}

impl fmt::Debug for LifecycleHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LifecycleHook(..)")
    }
}
