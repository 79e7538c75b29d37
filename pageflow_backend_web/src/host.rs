// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The browser window as a [`PageHost`].

use alloc::vec::Vec;

use pageflow_core::paginator::PageHost;
use web_sys::{Element, Window};

/// Class that marks the indicator of the current section.
const ACTIVE: &str = "active";

/// Scrolls the window and toggles the `active` class on indicator dots.
pub struct WindowHost {
    window: Window,
    indicators: Vec<Element>,
}

impl WindowHost {
    /// Creates a host for `window` with one indicator element per section.
    #[must_use]
    pub fn new(window: Window, indicators: Vec<Element>) -> Self {
        Self { window, indicators }
    }

    /// Indicator elements, in section order.
    #[must_use]
    pub fn indicators(&self) -> &[Element] {
        &self.indicators
    }
}

impl PageHost for WindowHost {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&mut self, offset: f64) {
        self.window.scroll_to_with_x_and_y(0.0, offset);
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.indicators.get(index) {
            let _ = dot.class_list().toggle_with_force(ACTIVE, active);
        }
    }
}

impl core::fmt::Debug for WindowHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowHost")
            .field("window", &"Window")
            .field("indicators_len", &self.indicators.len())
            .finish()
    }
}
