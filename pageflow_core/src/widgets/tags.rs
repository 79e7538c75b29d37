// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsible side tags whose state survives a reload.
//!
//! The collapsed flags of all tags live in one JSON object stored under a
//! single key, mapping element id to a boolean. The object is read once when
//! the tags are bound and rewritten in full on every toggle; entries for ids
//! that are not on the current page are carried along untouched.
//!
//! Storage is best effort. A missing, unreadable or malformed record means
//! "everything expanded", and a failed write leaves the page state as it is.
//! Neither reaches the page; both are reported as
//! [`StoreFailureEvent`]s.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::trace::{StoreFailureEvent, StoreOp, Tracer};

/// String key-value storage, as offered by `localStorage`.
pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Where a click on a tag landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickOrigin {
    /// On the tag itself or its plain content.
    Tag,
    /// On a link or button nested in the tag.
    Control,
    /// Anywhere, but another handler already called `preventDefault`.
    Handled,
}

impl ClickOrigin {
    /// Classifies a click from the target's tag name and the event's
    /// `defaultPrevented` flag.
    #[must_use]
    pub fn classify(target_tag_name: &str, default_prevented: bool) -> Self {
        if default_prevented {
            Self::Handled
        } else if target_tag_name.eq_ignore_ascii_case("a")
            || target_tag_name.eq_ignore_ascii_case("button")
        {
            Self::Control
        } else {
            Self::Tag
        }
    }
}

/// Returns `true` for the keys that activate a focused tag.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Id for the tag at `index`: its own id if it has a non-empty one,
/// `side-tag-{index}` otherwise.
#[must_use]
pub fn tag_id(existing: Option<&str>, index: usize) -> String {
    match existing {
        Some(id) if !id.is_empty() => String::from(id),
        _ => format!("side-tag-{index}"),
    }
}

/// New state of one tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagChange {
    /// Tag position.
    pub index: usize,
    /// Whether the tag carries the `collapsed` class.
    pub collapsed: bool,
}

impl TagChange {
    /// Value for the tag's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        if self.collapsed { "false" } else { "true" }
    }
}

/// Collapse state for every side tag on the page.
#[derive(Clone, Debug)]
pub struct TagCollapse {
    key: String,
    ids: Vec<String>,
    collapsed: Vec<bool>,
    record: Map<String, Value>,
}

impl TagCollapse {
    /// Binds tags with the given ids and restores their state from the record
    /// under `key`.
    pub fn restore<S: KeyValueStore + ?Sized>(
        store: &S,
        key: &str,
        ids: impl IntoIterator<Item = String>,
        tracer: &mut Tracer<'_>,
    ) -> Self {
        let record = match read_record(store, key) {
            Ok(record) => record,
            Err(error) => {
                tracer.store_failure(&StoreFailureEvent {
                    op: StoreOp::Read,
                    error,
                });
                Map::new()
            }
        };
        let ids: Vec<String> = ids.into_iter().collect();
        let collapsed = ids
            .iter()
            .map(|id| record.get(id).is_some_and(truthy))
            .collect();
        Self {
            key: String::from(key),
            ids,
            collapsed,
            record,
        }
    }

    /// Number of bound tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when no tags are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Id of the tag at `index`.
    #[must_use]
    pub fn id(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    /// Current state of the tag at `index`.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<TagChange> {
        let collapsed = *self.collapsed.get(index)?;
        Some(TagChange { index, collapsed })
    }

    /// Current state of every tag, in order.
    pub fn states(&self) -> impl Iterator<Item = TagChange> + '_ {
        self.collapsed
            .iter()
            .enumerate()
            .map(|(index, &collapsed)| TagChange { index, collapsed })
    }

    /// Handles a click on the tag at `index`.
    ///
    /// Clicks on nested controls or already handled clicks are left alone and
    /// return `None`.
    pub fn click<S: KeyValueStore + ?Sized>(
        &mut self,
        index: usize,
        origin: ClickOrigin,
        store: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> Option<TagChange> {
        match origin {
            ClickOrigin::Tag => self.toggle(index, store, tracer),
            ClickOrigin::Control | ClickOrigin::Handled => None,
        }
    }

    /// Handles a key press on the focused tag at `index`.
    pub fn key<S: KeyValueStore + ?Sized>(
        &mut self,
        index: usize,
        key: &str,
        store: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> Option<TagChange> {
        if is_activation_key(key) {
            self.toggle(index, store, tracer)
        } else {
            None
        }
    }

    /// Flips the tag at `index` and persists the record.
    ///
    /// The returned change applies even when the write fails.
    pub fn toggle<S: KeyValueStore + ?Sized>(
        &mut self,
        index: usize,
        store: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> Option<TagChange> {
        let slot = self.collapsed.get_mut(index)?;
        *slot = !*slot;
        let collapsed = *slot;
        self.record
            .insert(self.ids[index].clone(), Value::Bool(collapsed));

        let written = serde_json::to_string(&self.record)
            .map_err(|_| StoreError::Rejected)
            .and_then(|json| store.set(&self.key, &json));
        if let Err(error) = written {
            tracer.store_failure(&StoreFailureEvent {
                op: StoreOp::Write,
                error,
            });
        }
        Some(TagChange { index, collapsed })
    }
}

fn read_record<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Map<String, Value>, StoreError> {
    let Some(raw) = store.get(key)? else {
        return Ok(Map::new());
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => Ok(map),
        // `null`, numbers and other scalars carry no tag state.
        Ok(_) => Ok(Map::new()),
        Err(_) => Err(StoreError::Corrupt),
    }
}

/// JavaScript truthiness of a JSON value.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
