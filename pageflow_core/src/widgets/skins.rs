// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skin gallery: a row of thumbnails that swaps the featured video and caption.
//!
//! A selection happens in two steps. [`SkinSwitcher::request`] validates the
//! thumbnail and tells the glue to start fading the featured elements out;
//! once the fade has run, [`SkinSwitcher::commit`] returns the skin whose
//! media and text should be swapped in.

/// One entry of the skin catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Skin {
    /// Video source for both the featured and the background video.
    pub video: &'static str,
    /// Caption title.
    pub title: &'static str,
    /// Caption body.
    pub description: &'static str,
}

/// The catalog shipped with the landing page, in thumbnail order.
pub const STANDARD_SKINS: &[Skin] = &[
    Skin {
        video: "img/李白.mp4",
        title: "李白 · 青莲剑仙",
        description: "踏歌行，剑指青云。",
    },
    Skin {
        video: "img/貂蝉.mp4",
        title: "貂蝉 · 仲夏夜之梦",
        description: "霓裳轻舞，蝶影流光。",
    },
    Skin {
        video: "img/马可波罗.mp4",
        title: "马可波罗 · 潮玩先锋",
        description: "潮流枪术，涂鸦战场！",
    },
    Skin {
        video: "img/赵云.mp4",
        title: "赵云 · 龙胆赤影",
        description: "枪如龙啸，影焰无双。",
    },
];

/// Tracks the active skin of a gallery.
#[derive(Clone, Copy, Debug)]
pub struct SkinSwitcher {
    catalog: &'static [Skin],
    bound: usize,
    active: Option<usize>,
}

impl SkinSwitcher {
    /// Creates a switcher over `catalog` for a gallery with `thumbnails`
    /// thumbnails. Only the first `min(thumbnails, catalog.len())` are bound.
    #[must_use]
    pub fn new(catalog: &'static [Skin], thumbnails: usize) -> Self {
        Self {
            catalog,
            bound: thumbnails.min(catalog.len()),
            active: None,
        }
    }

    /// Number of thumbnails that get a click handler.
    #[must_use]
    pub const fn bound(&self) -> usize {
        self.bound
    }

    /// Skin applied by the last [`commit`](Self::commit).
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Starts a selection. Returns the skin to fade towards, or `None` for an
    /// unbound thumbnail.
    #[must_use]
    pub fn request(&self, index: usize) -> Option<&'static Skin> {
        if index < self.bound {
            self.catalog.get(index)
        } else {
            None
        }
    }

    /// Finishes a selection after the fade and records it as active.
    ///
    /// Overlapping selections each commit in turn; the last one to land is the
    /// one left showing.
    pub fn commit(&mut self, index: usize) -> Option<&'static Skin> {
        let skin = self.request(index)?;
        self.active = Some(index);
        Some(skin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_skins() {
        assert_eq!(STANDARD_SKINS.len(), 4);
        assert_eq!(STANDARD_SKINS[0].video, "img/李白.mp4");
        assert_eq!(STANDARD_SKINS[3].title, "赵云 · 龙胆赤影");
    }

    #[test]
    fn extra_thumbnails_are_not_bound() {
        let s = SkinSwitcher::new(STANDARD_SKINS, 6);
        assert_eq!(s.bound(), 4);
        assert!(s.request(3).is_some());
        assert!(s.request(4).is_none());
    }

    #[test]
    fn fewer_thumbnails_limit_the_catalog() {
        let mut s = SkinSwitcher::new(STANDARD_SKINS, 2);
        assert_eq!(s.bound(), 2);
        assert!(s.commit(2).is_none());
        assert_eq!(s.active(), None);
    }

    #[test]
    fn commit_records_active() {
        let mut s = SkinSwitcher::new(STANDARD_SKINS, 4);
        let skin = s.request(1).expect("bound");
        assert_eq!(s.active(), None, "request alone does not switch");
        assert_eq!(s.commit(1), Some(skin));
        assert_eq!(s.active(), Some(1));
        let _ = s.commit(0);
        assert_eq!(s.active(), Some(0));
    }
}
