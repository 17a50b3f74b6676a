//! Reactive page-head state.
//!
//! Component code reads and writes page-head fields (title, meta tags,
//! attribute groups) through individually reactive [`FieldHandle`]s, all
//! backed by one [`SharedHead`] record per component. Any write notifies
//! watchers so a downstream tag renderer can refresh the rendered head.
//!
//! ```
//! use std::sync::Arc;
//! use head_state::{use_head, ComponentScope, HeadPatch, HeadRecord, RenderMode};
//!
//! let renderer = Arc::new(|_snapshot: &HeadRecord| { /* render tags */ });
//! let scope = ComponentScope::with_head_slot(RenderMode::Client, renderer);
//!
//! let refs = use_head(&scope, Some(HeadPatch::default()))?;
//! refs.title.set(Some("My page".to_string()));
//! # Ok::<(), head_state::HeadError>(())
//! ```

pub mod accessor;
pub mod error;
pub mod options;
pub mod reactive;
pub mod record;
pub mod scope;
pub mod types;

pub use accessor::{use_head, HeadRefs};
pub use error::{HeadError, Result};
pub use options::{HeadOptions, HeadSource};
pub use reactive::{FieldHandle, SharedHead, Unsubscribe};
pub use record::{HeadPatch, HeadRecord};
pub use scope::{ComponentScope, HeadRenderer, RenderMode};
pub use types::{Attrs, HeadField, LifecycleHook, TagAttrs, TitleTemplate};
