// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debouncing.
//!
//! A [`Debouncer`] holds at most one pending value. Every
//! [`call`](Debouncer::call) replaces it and pushes the deadline out to
//! `now + delay`, so a burst of calls collapses into a single delivery of the
//! last value, `delay` after the last call.
//!
//! The debouncer does not schedule anything itself. A host either polls it
//! with the current time ([`poll`](Debouncer::poll)), or arms a one-shot
//! timer for each call, cancels the previous one, and drains the value with
//! [`flush`](Debouncer::flush) when the surviving timer fires.

use crate::time::{Duration, HostTime};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending<T> {
    value: T,
    deadline: HostTime,
}

/// Collapses bursts of calls into one delayed delivery.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Records a call at `now`, replacing any pending value.
    ///
    /// Returns the new deadline.
    pub fn call(&mut self, now: HostTime, value: T) -> HostTime {
        let deadline = now.saturating_add(self.delay);
        self.pending = Some(Pending { value, deadline });
        deadline
    }

    /// Takes the pending value if its deadline has passed at `now`.
    pub fn poll(&mut self, now: HostTime) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if due { self.flush() } else { None }
    }

    /// Takes the pending value regardless of its deadline.
    ///
    /// Used by hosts whose timer already enforces the delay.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drops the pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Deadline of the pending value, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<HostTime> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Returns `true` if a value is waiting to be delivered.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DEBOUNCE;

    #[test]
    fn burst_collapses_to_last_value() {
        let mut d = Debouncer::new(Duration::from_millis(50));
        let mut now = HostTime(1_000_000);
        for k in 0..5 {
            d.call(now, k);
            assert_eq!(d.poll(now), None, "nothing fires inside the window");
            now = now + Duration::from_millis(40);
        }
        // Last call was at now - 40ms; deadline is 10ms ahead.
        assert_eq!(d.poll(now), None);
        let fire_at = d.deadline().expect("pending");
        assert_eq!(d.poll(fire_at), Some(4));
        assert_eq!(d.poll(fire_at + Duration::from_millis(500)), None, "fires once");
    }

    #[test]
    fn separated_calls_each_fire() {
        let mut d = Debouncer::new(Duration::from_millis(50));
        d.call(HostTime(0), 'a');
        assert_eq!(d.poll(HostTime(50_000)), Some('a'));
        d.call(HostTime(60_000), 'b');
        assert_eq!(d.poll(HostTime(110_000)), Some('b'));
    }

    #[test]
    fn flush_ignores_deadline_and_cancel_drops() {
        let mut d = Debouncer::new(DEFAULT_DEBOUNCE);
        d.call(HostTime(0), 1);
        assert!(d.is_pending());
        assert_eq!(d.flush(), Some(1));
        assert!(!d.is_pending());

        d.call(HostTime(0), 2);
        d.cancel();
        assert_eq!(d.poll(HostTime(u64::MAX)), None);
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn default_delay_is_200ms() {
        let mut d = Debouncer::new(DEFAULT_DEBOUNCE);
        assert_eq!(d.call(HostTime(0), ()), HostTime(200_000));
    }
}
