// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabbed content panels.
//!
//! Each tab button names its panel through a target id (`data-target` in the
//! markup). Selecting a tab deactivates every button, hides every panel, and
//! then shows the one panel the button points at.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// What the DOM should look like after a tab click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSelection<'a> {
    /// Button that becomes active.
    pub button: usize,
    /// Target id the button names, if any.
    pub target: Option<&'a str>,
    /// Index of the known panel with that id, if any.
    pub panel: Option<usize>,
}

/// Button-to-panel mapping for one tab strip.
#[derive(Clone, Debug, Default)]
pub struct TabSet {
    targets: Vec<Option<String>>,
    panels: HashMap<String, usize>,
    active: Option<usize>,
}

impl TabSet {
    /// Builds a tab set from each button's target id and each panel's id.
    ///
    /// Panels without an id can still be hidden but never shown by a tab.
    /// When two panels share an id, the first one wins.
    #[must_use]
    pub fn new(
        targets: impl IntoIterator<Item = Option<String>>,
        panel_ids: impl IntoIterator<Item = Option<String>>,
    ) -> Self {
        let mut panels = HashMap::new();
        for (index, id) in panel_ids.into_iter().enumerate() {
            if let Some(id) = id {
                panels.entry(id).or_insert(index);
            }
        }
        Self {
            targets: targets.into_iter().collect(),
            panels,
            active: None,
        }
    }

    /// Number of buttons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` when there are no buttons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Last selected button.
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Selects button `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<TabSelection<'_>> {
        let target = self.targets.get(index)?.as_deref();
        self.active = Some(index);
        Some(TabSelection {
            button: index,
            target,
            panel: target.and_then(|id| self.panels.get(id).copied()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use alloc::vec;

    fn ids(v: &[Option<&str>]) -> Vec<Option<String>> {
        v.iter().map(|s| s.map(|s| s.to_string())).collect()
    }

    #[test]
    fn maps_buttons_to_panels() {
        let mut tabs = TabSet::new(
            ids(&[Some("news"), Some("events"), None]),
            ids(&[Some("events"), Some("news")]),
        );
        assert_eq!(tabs.len(), 3);

        let sel = tabs.select(0).expect("in range");
        assert_eq!(sel.button, 0);
        assert_eq!(sel.target, Some("news"));
        assert_eq!(sel.panel, Some(1));

        let sel = tabs.select(2).expect("in range");
        assert_eq!(sel.target, None);
        assert_eq!(sel.panel, None);
        assert_eq!(tabs.active(), Some(2));
    }

    #[test]
    fn last_click_wins() {
        let mut tabs = TabSet::new(ids(&[Some("a"), Some("b")]), ids(&[Some("a"), Some("b")]));
        let _ = tabs.select(1);
        let _ = tabs.select(0);
        let _ = tabs.select(1);
        assert_eq!(tabs.active(), Some(1));
    }

    #[test]
    fn unknown_target_has_no_panel() {
        let mut tabs = TabSet::new(ids(&[Some("elsewhere")]), vec![]);
        let sel = tabs.select(0).expect("in range");
        assert_eq!(sel.target, Some("elsewhere"));
        assert_eq!(sel.panel, None);
        assert!(tabs.select(5).is_none());
        assert_eq!(tabs.active(), Some(0));
    }
}
