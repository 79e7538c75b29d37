// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for page behaviors.
//!
//! This module provides a [`TraceSink`] trait with one method per event.
//! All method bodies default to no-ops, so implementing only the events you
//! care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! Events are plain `Copy` structs built from the values the state machines
//! already return ([`Request`], [`FrameOutcome`]), so instrumentation never
//! changes paginator behavior.
//!
//! [`FrameOutcome`]: crate::paginator::FrameOutcome

use crate::error::{ConfigError, StoreError};
use crate::input::InputSource;
use crate::paginator::{Request, Transition};
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when an input reaches the paginator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputEvent {
    /// Where the input came from.
    pub source: InputSource,
    /// Host time the input was handled.
    pub at: HostTime,
}

/// Emitted when a transition is accepted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionStartEvent {
    /// Section current at the time of the request.
    pub from: usize,
    /// Target section.
    pub to: usize,
    /// Scroll offset the animation starts from.
    pub start_offset: f64,
    /// Scroll offset the animation ends on.
    pub end_offset: f64,
    /// Host time the transition started.
    pub at: HostTime,
}

impl From<&Transition> for TransitionStartEvent {
    fn from(t: &Transition) -> Self {
        Self {
            from: t.from,
            to: t.to,
            start_offset: t.start_offset,
            end_offset: t.end_offset,
            at: t.started_at,
        }
    }
}

/// Why a request was turned down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// A transition was already running.
    Busy,
    /// The target index was outside the section range.
    OutOfRange,
    /// The input had no navigation meaning.
    Ignored,
}

/// Emitted when a request is turned down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionRejectEvent {
    /// Requested target, when the request named one.
    pub target: Option<isize>,
    /// Why the request was rejected.
    pub reason: RejectReason,
    /// Host time of the request.
    pub at: HostTime,
}

impl TransitionRejectEvent {
    /// Builds a reject event from a [`Request`], or `None` if the request was
    /// accepted.
    #[must_use]
    pub fn from_request(request: &Request, at: HostTime) -> Option<Self> {
        let (target, reason) = match *request {
            Request::Started(_) => return None,
            Request::Busy => (None, RejectReason::Busy),
            Request::OutOfRange { target } => (Some(target), RejectReason::OutOfRange),
            Request::Ignored => (None, RejectReason::Ignored),
        };
        Some(Self { target, reason, at })
    }
}

/// Emitted on the frame a transition finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionCompleteEvent {
    /// New current section.
    pub index: usize,
    /// Frames rendered during the transition.
    pub frames: u32,
    /// Host time of the final frame.
    pub at: HostTime,
}

/// Which store access failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreOp {
    /// Reading the saved record.
    Read,
    /// Writing the updated record.
    Write,
}

/// Emitted when persisted state could not be read or written.
///
/// These failures never reach the page; this event is the only record of
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreFailureEvent {
    /// The failed operation.
    pub op: StoreOp,
    /// The underlying error.
    pub error: StoreError,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from page behaviors.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an input reaches the paginator.
    fn on_input(&mut self, e: &InputEvent) {
        _ = e;
    }

    /// Called when a transition starts.
    fn on_transition_start(&mut self, e: &TransitionStartEvent) {
        _ = e;
    }

    /// Called when a transition request is rejected.
    fn on_transition_reject(&mut self, e: &TransitionRejectEvent) {
        _ = e;
    }

    /// Called when a transition completes.
    fn on_transition_complete(&mut self, e: &TransitionCompleteEvent) {
        _ = e;
    }

    /// Called when persisted state could not be read or written.
    fn on_store_failure(&mut self, e: &StoreFailureEvent) {
        _ = e;
    }

    /// Called when a behavior refused to initialize.
    fn on_config_error(&mut self, e: &ConfigError) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`InputEvent`].
    #[inline]
    pub fn input(&mut self, e: &InputEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_input(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits the start or reject event matching `request`.
    #[inline]
    pub fn request(&mut self, request: &Request, at: HostTime) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            match request {
                Request::Started(t) => s.on_transition_start(&TransitionStartEvent::from(t)),
                _ => {
                    if let Some(e) = TransitionRejectEvent::from_request(request, at) {
                        s.on_transition_reject(&e);
                    }
                }
            }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (request, at);
        }
    }

    /// Emits a [`TransitionCompleteEvent`].
    #[inline]
    pub fn transition_complete(&mut self, e: &TransitionCompleteEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_transition_complete(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StoreFailureEvent`].
    #[inline]
    pub fn store_failure(&mut self, e: &StoreFailureEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_store_failure(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ConfigError`].
    #[inline]
    pub fn config_error(&mut self, e: &ConfigError) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_config_error(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_event_from_transition() {
        let t = Transition {
            from: 0,
            to: 2,
            start_offset: 12.0,
            end_offset: 1800.0,
            started_at: HostTime(77),
        };
        let e = TransitionStartEvent::from(&t);
        assert_eq!((e.from, e.to), (0, 2));
        assert_eq!(e.end_offset, 1800.0);
        assert_eq!(e.at, HostTime(77));
    }

    #[test]
    fn reject_event_classifies_requests() {
        let at = HostTime(5);
        assert_eq!(
            TransitionRejectEvent::from_request(&Request::OutOfRange { target: -1 }, at),
            Some(TransitionRejectEvent {
                target: Some(-1),
                reason: RejectReason::OutOfRange,
                at,
            })
        );
        assert_eq!(
            TransitionRejectEvent::from_request(&Request::Busy, at).map(|e| e.reason),
            Some(RejectReason::Busy)
        );
        assert_eq!(
            TransitionRejectEvent::from_request(&Request::Ignored, at).map(|e| e.reason),
            Some(RejectReason::Ignored)
        );
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_input(&InputEvent {
            source: InputSource::Wheel,
            at: HostTime(0),
        });
        sink.on_store_failure(&StoreFailureEvent {
            op: StoreOp::Write,
            error: StoreError::Rejected,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.request(&Request::Busy, HostTime(0));
        tracer.transition_complete(&TransitionCompleteEvent {
            index: 1,
            frames: 48,
            at: HostTime(0),
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            starts: Vec<usize>,
            rejects: Vec<RejectReason>,
        }
        impl TraceSink for RecordingSink {
            fn on_transition_start(&mut self, e: &TransitionStartEvent) {
                self.starts.push(e.to);
            }
            fn on_transition_reject(&mut self, e: &TransitionRejectEvent) {
                self.rejects.push(e.reason);
            }
        }

        let mut sink = RecordingSink {
            starts: Vec::new(),
            rejects: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.request(
            &Request::Started(Transition {
                from: 0,
                to: 1,
                start_offset: 0.0,
                end_offset: 900.0,
                started_at: HostTime(0),
            }),
            HostTime(0),
        );
        tracer.request(&Request::Busy, HostTime(1));
        drop(tracer);
        assert_eq!(sink.starts, &[1]);
        assert_eq!(sink.rejects, &[RejectReason::Busy]);
    }
}
