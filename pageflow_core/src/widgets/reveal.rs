// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logo/QR swap driven by scroll position.
//!
//! While the viewport is near the top of the page a floating QR code is shown
//! and the navigation logo is hidden. Once the scroll offset reaches a
//! fraction of the first section's height the two swap.

/// What the header should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealState {
    /// Near the top: QR popup visible, nav logo hidden.
    Top,
    /// Scrolled past the threshold: QR popup hidden, nav logo visible.
    Scrolled,
}

impl RevealState {
    /// Whether the QR popup should carry its `hidden` class.
    #[must_use]
    pub const fn qr_hidden(self) -> bool {
        matches!(self, Self::Scrolled)
    }

    /// CSS `display` value for the nav logo.
    #[must_use]
    pub const fn logo_display(self) -> &'static str {
        match self {
            Self::Top => "none",
            Self::Scrolled => "block",
        }
    }
}

/// Tracks which side of the threshold the viewport is on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollReveal {
    threshold: f64,
    state: Option<RevealState>,
}

impl ScrollReveal {
    /// Creates a tracker that flips at `first_section_height * ratio`.
    #[must_use]
    pub fn new(first_section_height: f64, ratio: f64) -> Self {
        Self {
            threshold: first_section_height * ratio,
            state: None,
        }
    }

    /// Scroll offset at which the header flips.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// State at an arbitrary offset, without recording it.
    #[must_use]
    pub fn state_at(&self, scroll_y: f64) -> RevealState {
        if scroll_y >= self.threshold {
            RevealState::Scrolled
        } else {
            RevealState::Top
        }
    }

    /// Records a scroll position.
    ///
    /// Returns the new state when it differs from the last recorded one (the
    /// first call always reports), `None` otherwise.
    pub fn update(&mut self, scroll_y: f64) -> Option<RevealState> {
        let next = self.state_at(scroll_y);
        if self.state == Some(next) {
            return None;
        }
        self.state = Some(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_at_half_the_first_section() {
        let mut r = ScrollReveal::new(900.0, 0.5);
        assert_eq!(r.threshold(), 450.0);
        assert_eq!(r.update(0.0), Some(RevealState::Top));
        assert_eq!(r.update(449.9), None);
        assert_eq!(r.update(450.0), Some(RevealState::Scrolled));
        assert_eq!(r.update(2000.0), None);
        assert_eq!(r.update(10.0), Some(RevealState::Top));
    }

    #[test]
    fn state_maps_to_styles() {
        assert!(!RevealState::Top.qr_hidden());
        assert_eq!(RevealState::Top.logo_display(), "none");
        assert!(RevealState::Scrolled.qr_hidden());
        assert_eq!(RevealState::Scrolled.logo_display(), "block");
    }
}
