// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory key-value store with failure injection.

use alloc::string::String;

use hashbrown::HashMap;
use pageflow_core::error::StoreError;
use pageflow_core::widgets::tags::KeyValueStore;

/// A [`KeyValueStore`] backed by a hash map.
///
/// Reads and writes can be made to fail independently, to stand in for a
/// browser that blocks storage or is out of quota.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_error: Option<StoreError>,
    write_error: Option<StoreError>,
    writes: usize,
}

impl MemoryStore {
    /// Creates an empty, healthy store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw value directly, bypassing failure injection.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(String::from(key), String::from(value));
        self
    }

    /// Makes every read fail with `error`.
    pub fn fail_reads(&mut self, error: StoreError) {
        self.read_error = Some(error);
    }

    /// Makes every write fail with `error`.
    pub fn fail_writes(&mut self, error: StoreError) {
        self.write_error = Some(error);
    }

    /// Clears injected failures.
    pub fn heal(&mut self) {
        self.read_error = None;
        self.write_error = None;
    }

    /// Raw stored value, bypassing failure injection.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if let Some(error) = self.read_error {
            return Err(error);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(error) = self.write_error {
            return Err(error);
        }
        self.entries.insert(String::from(key), String::from(value));
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageflow_core::config::LandingConfig;
    use pageflow_core::trace::Tracer;
    use pageflow_core::widgets::tags::{TagCollapse, tag_id};
    use alloc::vec::Vec;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| tag_id(None, i)).collect()
    }

    #[test]
    fn injected_failures() {
        let mut store = MemoryStore::new().with_entry("k", "v");
        assert_eq!(store.get("k"), Ok(Some(String::from("v"))));
        store.fail_reads(StoreError::Unavailable);
        assert_eq!(store.get("k"), Err(StoreError::Unavailable));
        store.fail_writes(StoreError::Rejected);
        assert_eq!(store.set("k", "w"), Err(StoreError::Rejected));
        store.heal();
        assert_eq!(store.set("k", "w"), Ok(()));
        assert_eq!(store.raw("k"), Some("w"));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn tag_state_survives_a_reload() {
        let key = LandingConfig::standard().tag_storage_key;
        let mut store = MemoryStore::new();
        let mut tracer = Tracer::none();

        let mut tags = TagCollapse::restore(&store, key, ids(3), &mut tracer);
        let _ = tags.toggle(0, &mut store, &mut tracer);
        let _ = tags.toggle(2, &mut store, &mut tracer);
        let _ = tags.toggle(2, &mut store, &mut tracer);
        assert_eq!(store.writes(), 3);

        let reloaded = TagCollapse::restore(&store, key, ids(3), &mut tracer);
        let collapsed: Vec<bool> = reloaded.states().map(|s| s.collapsed).collect();
        assert_eq!(collapsed, [true, false, false]);
    }

    #[test]
    fn blocked_storage_keeps_the_page_working() {
        let key = LandingConfig::standard().tag_storage_key;
        let mut store = MemoryStore::new().with_entry(key, r#"{"side-tag-1":true}"#);
        store.fail_reads(StoreError::Unavailable);
        store.fail_writes(StoreError::Rejected);
        let mut tracer = Tracer::none();

        let mut tags = TagCollapse::restore(&store, key, ids(2), &mut tracer);
        assert!(tags.states().all(|s| !s.collapsed));
        let change = tags.toggle(1, &mut store, &mut tracer);
        assert!(change.is_some_and(|c| c.collapsed));
        assert_eq!(store.writes(), 0);
        assert_eq!(store.raw(key), Some(r#"{"side-tag-1":true}"#));
    }
}
