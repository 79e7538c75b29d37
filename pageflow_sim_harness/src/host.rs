// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording page host.

use alloc::vec;
use alloc::vec::Vec;

use pageflow_core::paginator::PageHost;

/// A page of equal-height sections that remembers what was done to it.
#[derive(Clone, Debug)]
pub struct SimHost {
    offset: f64,
    viewport_height: f64,
    indicators: Vec<bool>,
    scroll_writes: Vec<f64>,
}

impl SimHost {
    /// Creates a page scrolled to the top with `indicators` inactive dots.
    #[must_use]
    pub fn new(indicators: usize, viewport_height: f64) -> Self {
        Self {
            offset: 0.0,
            viewport_height,
            indicators: vec![false; indicators],
            scroll_writes: Vec::new(),
        }
    }

    /// Changes the viewport height, as a window resize would.
    pub fn resize(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height;
    }

    /// Moves the viewport without going through the paginator, as a user
    /// dragging the scrollbar would.
    pub fn scroll_by_user(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Indices of the indicators that are currently active.
    #[must_use]
    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect()
    }

    /// Every offset written through [`PageHost::scroll_to`], oldest first.
    #[must_use]
    pub fn scroll_writes(&self) -> &[f64] {
        &self.scroll_writes
    }

    /// Forgets the recorded scroll writes.
    pub fn clear_writes(&mut self) {
        self.scroll_writes.clear();
    }
}

impl PageHost for SimHost {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_to(&mut self, offset: f64) {
        self.offset = offset;
        self.scroll_writes.push(offset);
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.indicators.get_mut(index) {
            *dot = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_writes_and_dots() {
        let mut host = SimHost::new(3, 800.0);
        host.scroll_to(10.0);
        host.scroll_to(20.0);
        host.set_indicator_active(2, true);
        host.set_indicator_active(7, true);
        assert_eq!(host.scroll_offset(), 20.0);
        assert_eq!(host.scroll_writes(), &[10.0, 20.0]);
        assert_eq!(host.active_indicators(), [2]);
    }
}
