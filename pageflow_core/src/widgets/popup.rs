// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal login popup.

/// Clicks the popup cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PopupClick {
    /// The login button.
    Open,
    /// The close button inside the popup.
    Close,
    /// Any click on the page; `on_backdrop` is true when the click target is
    /// the popup overlay element itself rather than something inside it.
    Page {
        /// Whether the target was the overlay.
        on_backdrop: bool,
    },
}

/// Visibility state of the login popup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginPopup {
    open: bool,
}

impl LoginPopup {
    /// Creates a closed popup.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Returns `true` while the popup is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// CSS `display` value for the current state.
    #[must_use]
    pub const fn display(&self) -> &'static str {
        if self.open { "flex" } else { "none" }
    }

    /// Applies a click and returns the `display` value to write, if the click
    /// affects the popup.
    ///
    /// Open and close are written unconditionally, so repeated clicks keep
    /// the DOM in step even if something else touched the style.
    pub fn click(&mut self, click: PopupClick) -> Option<&'static str> {
        match click {
            PopupClick::Open => self.open = true,
            PopupClick::Close | PopupClick::Page { on_backdrop: true } => self.open = false,
            PopupClick::Page { on_backdrop: false } => return None,
        }
        Some(self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_close() {
        let mut p = LoginPopup::new();
        assert_eq!(p.display(), "none");
        assert_eq!(p.click(PopupClick::Open), Some("flex"));
        assert!(p.is_open());
        assert_eq!(p.click(PopupClick::Close), Some("none"));
        assert!(!p.is_open());
    }

    #[test]
    fn only_backdrop_clicks_dismiss() {
        let mut p = LoginPopup::new();
        let _ = p.click(PopupClick::Open);
        assert_eq!(p.click(PopupClick::Page { on_backdrop: false }), None);
        assert!(p.is_open(), "clicks inside the dialog keep it open");
        assert_eq!(p.click(PopupClick::Page { on_backdrop: true }), Some("none"));
        assert!(!p.is_open());
    }
}
