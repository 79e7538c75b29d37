// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-page scroll paging.
//!
//! The page is a stack of equal-height sections, each with an indicator dot.
//! A [`Paginator`] tracks which section is current and animates the viewport
//! from one section's top edge to another's. At most one transition is in
//! flight: requests that arrive while one is running are rejected, not
//! queued, and the running transition is never interrupted.
//!
//! # Driving a paginator
//!
//! ```rust,ignore
//! // On any input:
//! match paginator.handle_input(&mut host, now(), input) {
//!     Request::Started(_) => frame_loop.start(),
//!     _ => {}
//! }
//!
//! // On every animation frame while the loop runs:
//! if !paginator.on_frame(&mut host, tick.now).is_animating() {
//!     return LoopControl::Stop;
//! }
//! ```
//!
//! The paginator reads and writes the page only through [`PageHost`], so the
//! same state machine runs in the browser and against a simulated host.

use crate::animate::{AnimationStatus, Animator};
use crate::config::PaginatorConfig;
use crate::error::ConfigError;
use crate::input::{Direction, PageInput};
use crate::time::HostTime;

/// The page capabilities a [`Paginator`] needs.
pub trait PageHost {
    /// Current vertical scroll offset of the viewport, in CSS pixels.
    fn scroll_offset(&self) -> f64;

    /// Current viewport height, in CSS pixels. Read once per request.
    fn viewport_height(&self) -> f64;

    /// Moves the viewport to the given vertical offset.
    fn scroll_to(&mut self, offset: f64);

    /// Sets or clears the active state of one indicator.
    fn set_indicator_active(&mut self, index: usize, active: bool);
}

/// A transition that has been accepted and is now running.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Section that was current when the request was accepted.
    pub from: usize,
    /// Section being moved to.
    pub to: usize,
    /// Scroll offset at the start of the transition.
    pub start_offset: f64,
    /// Scroll offset the transition ends on.
    pub end_offset: f64,
    /// Host time the transition started.
    pub started_at: HostTime,
}

/// Result of a transition request.
#[derive(Clone, Copy, Debug, PartialEq)]
#[must_use]
pub enum Request {
    /// The request was accepted.
    Started(Transition),
    /// Another transition is running.
    Busy,
    /// The target index is outside `0..section_count`.
    OutOfRange {
        /// The rejected target.
        target: isize,
    },
    /// The input does not map to any navigation (unbound key, zero wheel
    /// delta, swipe inside the dead zone).
    Ignored,
}

impl Request {
    /// Returns the started transition, if any.
    #[must_use]
    pub const fn started(&self) -> Option<&Transition> {
        match self {
            Self::Started(t) => Some(t),
            _ => None,
        }
    }
}

/// Result of advancing a paginator by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// No transition is running.
    Idle,
    /// A transition is running; the viewport was moved to `offset`.
    Animating {
        /// Scroll offset written this frame.
        offset: f64,
    },
    /// The running transition ended on this frame.
    Completed {
        /// New current section.
        index: usize,
        /// Frames the transition took, including this one.
        frames: u32,
    },
}

impl FrameOutcome {
    /// Returns `true` if more frames are needed.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Transitioning {
        target: usize,
        animator: Animator,
        frames: u32,
    },
}

/// Section state machine with an animation lock.
#[derive(Clone, Debug)]
pub struct Paginator {
    sections: usize,
    current: usize,
    phase: Phase,
    config: PaginatorConfig,
}

impl Paginator {
    /// Creates a paginator for `sections` sections with `indicators` dots.
    ///
    /// If either count is zero the paginator is inert: it accepts no
    /// requests. Two non-zero counts that differ are a configuration error.
    pub fn new(
        sections: usize,
        indicators: usize,
        config: PaginatorConfig,
    ) -> Result<Self, ConfigError> {
        let sections = if sections == 0 || indicators == 0 {
            0
        } else if sections != indicators {
            return Err(ConfigError::IndicatorMismatch {
                sections,
                indicators,
            });
        } else {
            sections
        };
        Ok(Self {
            sections,
            current: 0,
            phase: Phase::Idle,
            config,
        })
    }

    /// Number of addressable sections (zero when inert).
    #[must_use]
    pub const fn section_count(&self) -> usize {
        self.sections
    }

    /// Returns `true` if the page lacked sections or indicators.
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        self.sections == 0
    }

    /// The committed current section.
    ///
    /// This only changes when a transition completes.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Returns `true` while a transition is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Target of the running transition, if any.
    #[must_use]
    pub const fn target(&self) -> Option<usize> {
        match self.phase {
            Phase::Transitioning { target, .. } => Some(target),
            Phase::Idle => None,
        }
    }

    /// The configuration this paginator was built with.
    #[must_use]
    pub const fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// Marks the indicator for the current section active and clears the
    /// rest. Does nothing while inert.
    pub fn sync_indicators(&self, host: &mut impl PageHost) {
        for i in 0..self.sections {
            host.set_indicator_active(i, i == self.current);
        }
    }

    /// Requests a move to section `target`.
    ///
    /// Rejected while a transition runs or when `target` is out of range;
    /// rejections leave all state untouched. On acceptance the viewport
    /// height is read fresh and an animation toward
    /// `viewport_height * target` begins at `now`.
    pub fn request_transition(
        &mut self,
        host: &mut impl PageHost,
        now: HostTime,
        target: isize,
    ) -> Request {
        if self.is_animating() {
            return Request::Busy;
        }
        let Some(index) = usize::try_from(target).ok().filter(|&i| i < self.sections) else {
            return Request::OutOfRange { target };
        };

        let start_offset = host.scroll_offset();
        let end_offset = host.viewport_height() * index as f64;
        self.phase = Phase::Transitioning {
            target: index,
            animator: Animator::new(start_offset, end_offset, self.config.transition, now),
            frames: 0,
        };
        Request::Started(Transition {
            from: self.current,
            to: index,
            start_offset,
            end_offset,
            started_at: now,
        })
    }

    /// Requests a move one section in `direction`.
    pub fn step(&mut self, host: &mut impl PageHost, now: HostTime, direction: Direction) -> Request {
        let target = self.current as isize + direction.step();
        self.request_transition(host, now, target)
    }

    /// Routes one input to the transition entry point.
    ///
    /// Wheel, keyboard and swipe input is dropped while a transition runs.
    /// Indicator clicks go straight to
    /// [`request_transition`](Self::request_transition), whose lock rejects
    /// them in the same situation.
    pub fn handle_input(
        &mut self,
        host: &mut impl PageHost,
        now: HostTime,
        input: PageInput,
    ) -> Request {
        if let PageInput::Indicator(index) = input {
            let target = isize::try_from(index).unwrap_or(isize::MAX);
            return self.request_transition(host, now, target);
        }
        if self.is_animating() {
            return Request::Busy;
        }
        match self.relative_direction(input) {
            Some(direction) => self.step(host, now, direction),
            None => Request::Ignored,
        }
    }

    fn relative_direction(&self, input: PageInput) -> Option<Direction> {
        match input {
            PageInput::Wheel { delta } => Direction::from_wheel(delta),
            PageInput::Key(key) => key.direction(),
            PageInput::Swipe { start, end } => {
                let dy = end.y - start.y;
                let magnitude = if dy < 0.0 { -dy } else { dy };
                if magnitude > self.config.swipe_threshold {
                    // Finger moving up pulls the next section into view.
                    Some(if dy < 0.0 {
                        Direction::Next
                    } else {
                        Direction::Previous
                    })
                } else {
                    None
                }
            }
            PageInput::Indicator(_) => None,
        }
    }

    /// Advances the running transition to `now`.
    ///
    /// Each frame moves the viewport. On the final frame the viewport lands
    /// exactly on the target offset, `current` becomes the target, the lock
    /// is released, and only the target's indicator is left active.
    pub fn on_frame(&mut self, host: &mut impl PageHost, now: HostTime) -> FrameOutcome {
        let Phase::Transitioning {
            target,
            ref mut animator,
            ref mut frames,
        } = self.phase
        else {
            return FrameOutcome::Idle;
        };

        *frames += 1;
        let mut offset = animator.from();
        let status = animator.frame(
            now,
            |value| {
                offset = value;
                host.scroll_to(value);
            },
            || {},
        );
        if status == AnimationStatus::Running {
            return FrameOutcome::Animating { offset };
        }

        let frames = *frames;
        self.current = target;
        self.phase = Phase::Idle;
        self.sync_indicators(host);
        FrameOutcome::Completed {
            index: target,
            frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::time::Duration;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::{Point, Vec2};

    #[derive(Debug)]
    struct FakeHost {
        offset: f64,
        height: f64,
        dots: Vec<bool>,
        writes: usize,
    }

    impl FakeHost {
        fn new(sections: usize) -> Self {
            Self {
                offset: 0.0,
                height: 900.0,
                dots: vec![false; sections],
                writes: 0,
            }
        }

        fn active(&self) -> Vec<usize> {
            self.dots
                .iter()
                .enumerate()
                .filter_map(|(i, &on)| on.then_some(i))
                .collect()
        }
    }

    impl PageHost for FakeHost {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn scroll_to(&mut self, offset: f64) {
            self.offset = offset;
            self.writes += 1;
        }

        fn set_indicator_active(&mut self, index: usize, active: bool) {
            self.dots[index] = active;
        }
    }

    const FRAME: Duration = Duration(16_667);

    fn finish(p: &mut Paginator, host: &mut FakeHost, mut now: HostTime) -> (FrameOutcome, HostTime) {
        loop {
            now = now + FRAME;
            let outcome = p.on_frame(host, now);
            if !outcome.is_animating() {
                return (outcome, now);
            }
        }
    }

    fn paginator(n: usize) -> Paginator {
        Paginator::new(n, n, PaginatorConfig::web()).expect("matched counts")
    }

    #[test]
    fn empty_lists_make_an_inert_paginator() {
        for (s, d) in [(0, 0), (3, 0), (0, 3)] {
            let mut p = Paginator::new(s, d, PaginatorConfig::web()).expect("inert, not an error");
            assert!(p.is_inert());
            let mut host = FakeHost::new(0);
            assert_eq!(
                p.request_transition(&mut host, HostTime(0), 0),
                Request::OutOfRange { target: 0 }
            );
            assert_eq!(
                p.handle_input(&mut host, HostTime(0), PageInput::Key(Key::PageDown)),
                Request::OutOfRange { target: 1 }
            );
            assert_eq!(host.writes, 0);
        }
    }

    #[test]
    fn mismatched_counts_are_a_config_error() {
        assert_eq!(
            Paginator::new(4, 3, PaginatorConfig::web()).unwrap_err(),
            ConfigError::IndicatorMismatch {
                sections: 4,
                indicators: 3
            }
        );
    }

    #[test]
    fn completed_transition_commits_index_and_indicator() {
        let mut p = paginator(4);
        let mut host = FakeHost::new(4);
        let start = HostTime(1_000_000);

        let req = p.request_transition(&mut host, start, 2);
        let t = req.started().copied().expect("accepted");
        assert_eq!((t.from, t.to), (0, 2));
        assert_eq!(t.end_offset, 1800.0);
        assert_eq!(p.current(), 0, "index commits at completion, not request");
        assert_eq!(p.target(), Some(2));

        let (outcome, end) = finish(&mut p, &mut host, start);
        assert!(matches!(outcome, FrameOutcome::Completed { index: 2, .. }));
        assert!(end.saturating_duration_since(start) >= Duration::from_millis(800));
        assert_eq!(p.current(), 2);
        assert!(!p.is_animating());
        assert_eq!(host.offset, 1800.0);
        assert_eq!(host.active(), vec![2]);
        assert_eq!(p.on_frame(&mut host, end + FRAME), FrameOutcome::Idle);
    }

    #[test]
    fn requests_during_a_transition_are_rejected() {
        let mut p = paginator(4);
        let mut host = FakeHost::new(4);
        let start = HostTime(0);
        assert!(p.request_transition(&mut host, start, 1).started().is_some());

        let mid = start + Duration::from_millis(200);
        let _ = p.on_frame(&mut host, mid);
        for input in [
            PageInput::Wheel {
                delta: Vec2::new(0.0, 100.0),
            },
            PageInput::Key(Key::ArrowDown),
            PageInput::Indicator(3),
            PageInput::Swipe {
                start: Point::new(0.0, 600.0),
                end: Point::new(0.0, 100.0),
            },
        ] {
            assert_eq!(p.handle_input(&mut host, mid, input), Request::Busy, "{input:?}");
        }
        assert_eq!(p.request_transition(&mut host, mid, 0), Request::Busy);
        assert_eq!(p.target(), Some(1), "running transition keeps its target");
        assert_eq!(p.current(), 0);

        let (outcome, _) = finish(&mut p, &mut host, mid);
        assert!(matches!(outcome, FrameOutcome::Completed { index: 1, .. }));
        assert_eq!(host.active(), vec![1]);
    }

    #[test]
    fn boundary_requests_are_ignored_not_clamped() {
        let mut p = paginator(4);
        let mut host = FakeHost::new(4);
        p.sync_indicators(&mut host);

        assert_eq!(
            p.request_transition(&mut host, HostTime(0), -1),
            Request::OutOfRange { target: -1 }
        );
        assert_eq!(
            p.request_transition(&mut host, HostTime(0), 4),
            Request::OutOfRange { target: 4 }
        );
        assert_eq!(
            p.handle_input(&mut host, HostTime(0), PageInput::Key(Key::PageUp)),
            Request::OutOfRange { target: -1 }
        );
        assert_eq!(p.current(), 0);
        assert!(!p.is_animating());
        assert_eq!(host.active(), vec![0]);
        assert_eq!(host.writes, 0);

        // Walk to the last section, then try to go past it.
        let mut now = HostTime(0);
        for _ in 0..3 {
            let _ = p.handle_input(&mut host, now, PageInput::Key(Key::PageDown));
            now = finish(&mut p, &mut host, now).1;
        }
        assert_eq!(p.current(), 3);
        assert_eq!(
            p.handle_input(&mut host, now, PageInput::Key(Key::ArrowDown)),
            Request::OutOfRange { target: 4 }
        );
        assert_eq!(host.active(), vec![3]);
    }

    #[test]
    fn indicator_click_jumps_directly() {
        let mut p = paginator(4);
        let mut host = FakeHost::new(4);
        let req = p.handle_input(&mut host, HostTime(0), PageInput::Indicator(3));
        assert_eq!(req.started().map(|t| t.to), Some(3));

        let mut seen = Vec::new();
        let mut now = HostTime(0);
        loop {
            now = now + FRAME;
            let outcome = p.on_frame(&mut host, now);
            seen.push(p.current());
            if !outcome.is_animating() {
                break;
            }
        }
        assert!(seen[..seen.len() - 1].iter().all(|&c| c == 0), "no stepwise commits");
        assert_eq!(p.current(), 3);
        assert_eq!(host.offset, 2700.0);
    }

    #[test]
    fn swipe_dead_zone_and_direction() {
        let mut p = paginator(4);
        let mut host = FakeHost::new(4);
        let swipe = |from: f64, to: f64| PageInput::Swipe {
            start: Point::new(0.0, from),
            end: Point::new(0.0, to),
        };

        assert_eq!(p.handle_input(&mut host, HostTime(0), swipe(500.0, 540.0)), Request::Ignored);
        assert_eq!(p.handle_input(&mut host, HostTime(0), swipe(500.0, 440.0)), Request::Ignored);
        assert_eq!(
            p.handle_input(&mut host, HostTime(0), swipe(500.0, 580.0)),
            Request::OutOfRange { target: -1 },
            "downward swipe goes back"
        );
        let req = p.handle_input(&mut host, HostTime(0), swipe(500.0, 420.0));
        assert_eq!(req.started().map(|t| t.to), Some(1), "upward swipe advances");
    }

    #[test]
    fn viewport_height_is_read_per_request() {
        let mut p = paginator(3);
        let mut host = FakeHost::new(3);
        let _ = p.request_transition(&mut host, HostTime(0), 1);
        let (_, now) = finish(&mut p, &mut host, HostTime(0));

        host.height = 500.0;
        let req = p.request_transition(&mut host, now, 2);
        assert_eq!(
            req.started().map(|t| (t.start_offset, t.end_offset)),
            Some((900.0, 1000.0))
        );
    }

    #[test]
    fn unbound_inputs_are_ignored() {
        let mut p = paginator(2);
        let mut host = FakeHost::new(2);
        assert_eq!(
            p.handle_input(&mut host, HostTime(0), PageInput::Key(Key::Other)),
            Request::Ignored
        );
        assert_eq!(
            p.handle_input(&mut host, HostTime(0), PageInput::Wheel { delta: Vec2::ZERO }),
            Request::Ignored
        );
    }
}
