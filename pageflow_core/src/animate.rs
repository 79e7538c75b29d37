// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven eased animation.
//!
//! An [`Animator`] moves a value from `from` to `to` over a fixed
//! [`Duration`], following [`ease_out_cubic`]. It does not own a frame
//! source: whoever holds it calls [`frame`](Animator::frame) once per display
//! frame with that frame's time stamp.
//!
//! There is no cancellation. An animator always runs to its end value, and
//! callers that want to avoid overlapping motion refuse to start a new one
//! while an old one is live (see [`Paginator`](crate::paginator::Paginator)).

use crate::easing::ease_out_cubic;
use crate::time::{Duration, HostTime};

/// Whether an [`Animator`] still has frames to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationStatus {
    /// More frames are needed.
    Running,
    /// The end value has been emitted and completion has fired.
    Finished,
}

/// A cubic ease-out tween between two values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animator {
    from: f64,
    to: f64,
    duration: Duration,
    started_at: HostTime,
    finished: bool,
}

impl Animator {
    /// Creates an animator whose clock starts at `started_at`.
    #[must_use]
    pub const fn new(from: f64, to: f64, duration: Duration, started_at: HostTime) -> Self {
        Self {
            from,
            to,
            duration,
            started_at,
            finished: false,
        }
    }

    /// Start value.
    #[must_use]
    pub const fn from(&self) -> f64 {
        self.from
    }

    /// End value.
    #[must_use]
    pub const fn to(&self) -> f64 {
        self.to
    }

    /// Host time the animation started.
    #[must_use]
    pub const fn started_at(&self) -> HostTime {
        self.started_at
    }

    /// Returns `true` once the completion callback has run.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Linear progress in `[0, 1]` at `now`.
    ///
    /// Frame stamps that precede `started_at` count as zero elapsed time; a
    /// zero duration is complete immediately.
    #[must_use]
    pub fn progress(&self, now: HostTime) -> f64 {
        if self.duration == Duration::ZERO {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.ticks() as f64 / self.duration.ticks() as f64).clamp(0.0, 1.0)
    }

    /// Eased value at `now`. Returns `to` exactly once progress reaches 1.
    #[must_use]
    pub fn value_at(&self, now: HostTime) -> f64 {
        let p = self.progress(now);
        if p >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * ease_out_cubic(p)
        }
    }

    /// Advances the animation to `now`.
    ///
    /// While running, `on_frame` receives the eased value. On the frame where
    /// progress reaches 1, `on_frame` receives `to` and then `on_complete`
    /// runs. That happens exactly once; later calls do nothing and report
    /// [`AnimationStatus::Finished`].
    pub fn frame(
        &mut self,
        now: HostTime,
        on_frame: impl FnOnce(f64),
        on_complete: impl FnOnce(),
    ) -> AnimationStatus {
        if self.finished {
            return AnimationStatus::Finished;
        }
        on_frame(self.value_at(now));
        if self.progress(now) >= 1.0 {
            self.finished = true;
            on_complete();
            AnimationStatus::Finished
        } else {
            AnimationStatus::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const FRAME: Duration = Duration(16_667);

    fn run_to_end(anim: &mut Animator, start: HostTime) -> (Vec<f64>, u32, HostTime) {
        let mut values = Vec::new();
        let mut completions = 0;
        let mut now = start;
        loop {
            let status = anim.frame(now, |v| values.push(v), || completions += 1);
            if status == AnimationStatus::Finished {
                return (values, completions, now);
            }
            now = now + FRAME;
        }
    }

    #[test]
    fn completes_exactly_once_with_exact_end_value() {
        let start = HostTime(5_000_000);
        for &(from, to, ms) in &[
            (0.0, 2400.0, 800_u64),
            (1800.0, 600.0, 800),
            (0.1, 0.3, 250),
            (-40.0, -40.0, 16),
        ] {
            let mut anim = Animator::new(from, to, Duration::from_millis(ms), start);
            let (values, completions, finished_at) = run_to_end(&mut anim, start);
            assert_eq!(completions, 1, "completion for {from}->{to}");
            assert_eq!(values.last().copied(), Some(to), "final frame for {from}->{to}");
            assert!(
                finished_at.saturating_duration_since(start) >= Duration::from_millis(ms),
                "finished early for {from}->{to}"
            );

            // Further frames are inert.
            let status = anim.frame(finished_at + FRAME, |_| panic!("frame after end"), || {
                panic!("second completion")
            });
            assert_eq!(status, AnimationStatus::Finished);
        }
    }

    #[test]
    fn values_move_monotonically_toward_target() {
        let start = HostTime(0);
        let mut anim = Animator::new(1200.0, 0.0, Duration::from_millis(800), start);
        let (values, _, _) = run_to_end(&mut anim, start);
        assert!(values.windows(2).all(|w| w[1] <= w[0]), "values must not reverse");
        assert_eq!(values[0], 1200.0, "first frame at start time shows start value");
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let mut anim = Animator::new(0.0, 10.0, Duration::ZERO, HostTime(100));
        let mut seen = None;
        let status = anim.frame(HostTime(100), |v| seen = Some(v), || {});
        assert_eq!(status, AnimationStatus::Finished);
        assert_eq!(seen, Some(10.0));
    }

    #[test]
    fn frame_stamp_before_start_counts_as_zero_progress() {
        let anim = Animator::new(0.0, 100.0, Duration::from_millis(800), HostTime(10_000));
        assert_eq!(anim.progress(HostTime(9_000)), 0.0);
        assert_eq!(anim.value_at(HostTime(9_000)), 0.0);
    }

    #[test]
    fn midpoint_follows_ease_out_curve() {
        let anim = Animator::new(0.0, 800.0, Duration::from_millis(800), HostTime(0));
        let mid = anim.value_at(HostTime(400_000));
        assert!((mid - 700.0).abs() < 1e-9, "expected 700, got {mid}");
    }
}
