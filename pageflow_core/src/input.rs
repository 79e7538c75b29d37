// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input vocabulary for the paginator.
//!
//! Raw browser events are reduced to the handful of facts the paginator
//! needs: a wheel delta, a key identity, an indicator index, or the two end
//! points of a touch gesture.

use kurbo::{Point, Vec2};

/// Which way a relative request moves through the sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher section indices (scrolling down the page).
    Next,
    /// Toward lower section indices.
    Previous,
}

impl Direction {
    /// Index offset for this direction.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }

    /// Direction implied by a wheel delta: positive `y` scrolls down.
    ///
    /// A zero (or NaN) vertical delta has no direction.
    #[must_use]
    pub fn from_wheel(delta: Vec2) -> Option<Self> {
        if delta.y > 0.0 {
            Some(Self::Next)
        } else if delta.y < 0.0 {
            Some(Self::Previous)
        } else {
            None
        }
    }
}

/// Keys the paginator reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `PageDown`.
    PageDown,
    /// `ArrowDown`.
    ArrowDown,
    /// `PageUp`.
    PageUp,
    /// `ArrowUp`.
    ArrowUp,
    /// Anything else.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "PageDown" => Self::PageDown,
            "ArrowDown" => Self::ArrowDown,
            "PageUp" => Self::PageUp,
            "ArrowUp" => Self::ArrowUp,
            _ => Self::Other,
        }
    }

    /// Navigation direction bound to this key, if any.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::PageDown | Self::ArrowDown => Some(Direction::Next),
            Self::PageUp | Self::ArrowUp => Some(Direction::Previous),
            Self::Other => None,
        }
    }
}

/// One input delivered to [`Paginator::handle_input`].
///
/// [`Paginator::handle_input`]: crate::paginator::Paginator::handle_input
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageInput {
    /// A wheel event that survived the debounce window.
    Wheel {
        /// Scroll delta as reported by the event.
        delta: Vec2,
    },
    /// A key press.
    Key(Key),
    /// A click on the indicator at this index.
    Indicator(usize),
    /// A completed touch gesture.
    Swipe {
        /// Touch position at `touchstart`.
        start: Point,
        /// Touch position at `touchend`.
        end: Point,
    },
}

impl PageInput {
    /// Short label used in traces.
    #[must_use]
    pub const fn source(&self) -> InputSource {
        match self {
            Self::Wheel { .. } => InputSource::Wheel,
            Self::Key(_) => InputSource::Keyboard,
            Self::Indicator(_) => InputSource::Indicator,
            Self::Swipe { .. } => InputSource::Touch,
        }
    }
}

/// Where an input came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Mouse wheel or trackpad scroll.
    Wheel,
    /// Keyboard.
    Keyboard,
    /// Indicator dot click.
    Indicator,
    /// Touch swipe.
    Touch,
}

/// Pairs `touchstart` and `touchend` into a [`PageInput::Swipe`].
///
/// Only the most recent start point is kept. A `touchend` without any prior
/// `touchstart` measures from the origin, which matches a fresh page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Point,
}

impl SwipeTracker {
    /// Creates a tracker with no recorded touch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: Point::ORIGIN,
        }
    }

    /// Records the first touch point of a gesture.
    pub fn touch_start(&mut self, at: Point) {
        self.start = at;
    }

    /// Closes the gesture at `at`.
    #[must_use]
    pub fn touch_end(&self, at: Point) -> PageInput {
        PageInput::Swipe {
            start: self.start,
            end: at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys_map_to_directions() {
        assert_eq!(Key::from_dom("PageDown").direction(), Some(Direction::Next));
        assert_eq!(Key::from_dom("ArrowDown").direction(), Some(Direction::Next));
        assert_eq!(Key::from_dom("PageUp").direction(), Some(Direction::Previous));
        assert_eq!(Key::from_dom("ArrowUp").direction(), Some(Direction::Previous));
        assert_eq!(Key::from_dom("Enter"), Key::Other);
        assert_eq!(Key::from_dom("arrowdown").direction(), None);
    }

    #[test]
    fn wheel_sign_picks_direction() {
        assert_eq!(Direction::from_wheel(Vec2::new(0.0, 3.0)), Some(Direction::Next));
        assert_eq!(Direction::from_wheel(Vec2::new(0.0, -120.0)), Some(Direction::Previous));
        assert_eq!(Direction::from_wheel(Vec2::new(40.0, 0.0)), None);
        assert_eq!(Direction::from_wheel(Vec2::new(0.0, f64::NAN)), None);
    }

    #[test]
    fn tracker_pairs_latest_start_with_end() {
        let mut t = SwipeTracker::new();
        t.touch_start(Point::new(10.0, 500.0));
        t.touch_start(Point::new(12.0, 400.0));
        assert_eq!(
            t.touch_end(Point::new(12.0, 320.0)),
            PageInput::Swipe {
                start: Point::new(12.0, 400.0),
                end: Point::new(12.0, 320.0),
            }
        );
    }
}
