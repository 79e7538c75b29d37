// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing and threshold tables.
//!
//! Every constant the page behaviors depend on lives here, grouped into
//! plain `Copy` structs with `const` constructors so they can be built in
//! `static` position and tweaked field by field.

use crate::time::Duration;

/// Delay used by [`Debouncer`](crate::debounce::Debouncer) users that do not
/// pick their own.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Configuration for the [`Paginator`](crate::paginator::Paginator) and its
/// input adapters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaginatorConfig {
    /// Length of one section transition.
    pub transition: Duration,
    /// Debounce window applied to wheel events before they reach the
    /// paginator.
    pub wheel_debounce: Duration,
    /// Minimum vertical travel, in CSS pixels, for a touch swipe to count.
    /// Swipes whose magnitude is less than or equal to this are ignored.
    pub swipe_threshold: f64,
}

impl PaginatorConfig {
    /// Browser defaults: 800 ms transitions, 50 ms wheel debounce, 60 px
    /// swipe dead zone.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            transition: Duration::from_millis(800),
            wheel_debounce: Duration::from_millis(50),
            swipe_threshold: 60.0,
        }
    }
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self::web()
    }
}

/// Configuration for the whole landing page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandingConfig {
    /// Full-page scroll settings.
    pub paging: PaginatorConfig,
    /// Time each carousel image stays active.
    pub carousel_interval: Duration,
    /// Fade-out time before a new skin is swapped in.
    pub skin_fade: Duration,
    /// Fraction of the first section's height after which the nav logo
    /// replaces the QR popup.
    pub reveal_ratio: f64,
    /// Storage key of the persisted side-tag record.
    pub tag_storage_key: &'static str,
}

impl LandingConfig {
    /// The stock landing page.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            paging: PaginatorConfig::web(),
            carousel_interval: Duration::from_millis(3000),
            skin_fade: Duration::from_millis(300),
            reveal_ratio: 0.5,
            tag_storage_key: "sideTagState",
        }
    }
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_paging_defaults() {
        let cfg = PaginatorConfig::default();
        assert_eq!(cfg.transition.as_millis(), 800);
        assert_eq!(cfg.wheel_debounce.as_millis(), 50);
        assert_eq!(cfg.swipe_threshold, 60.0);
    }

    #[test]
    fn standard_landing_defaults() {
        let cfg = LandingConfig::default();
        assert_eq!(cfg.paging, PaginatorConfig::web());
        assert_eq!(cfg.carousel_interval.as_millis(), 3000);
        assert_eq!(cfg.skin_fade.as_millis(), 300);
        assert_eq!(cfg.tag_storage_key, "sideTagState");
    }
}
