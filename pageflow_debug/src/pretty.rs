// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Host time
//! stamps are printed in milliseconds.

use std::io::Write;

use pageflow_core::error::ConfigError;
use pageflow_core::input::InputSource;
use pageflow_core::time::HostTime;
use pageflow_core::trace::{
    InputEvent, RejectReason, StoreFailureEvent, StoreOp, TraceSink, TransitionCompleteEvent,
    TransitionRejectEvent, TransitionStartEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    t.ticks() as f64 / 1000.0
}

fn source_name(source: InputSource) -> &'static str {
    match source {
        InputSource::Wheel => "wheel",
        InputSource::Keyboard => "key",
        InputSource::Indicator => "dot",
        InputSource::Touch => "touch",
    }
}

fn reason_name(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::Busy => "busy",
        RejectReason::OutOfRange => "out-of-range",
        RejectReason::Ignored => "ignored",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_input(&mut self, e: &InputEvent) {
        let _ = writeln!(
            self.writer,
            "[input] {} at {:.1}ms",
            source_name(e.source),
            ms(e.at),
        );
    }

    fn on_transition_start(&mut self, e: &TransitionStartEvent) {
        let _ = writeln!(
            self.writer,
            "[start] {} -> {} offset {:.0}px -> {:.0}px at {:.1}ms",
            e.from,
            e.to,
            e.start_offset,
            e.end_offset,
            ms(e.at),
        );
    }

    fn on_transition_reject(&mut self, e: &TransitionRejectEvent) {
        let target = e
            .target
            .map_or_else(|| String::from("-"), |t| t.to_string());
        let _ = writeln!(
            self.writer,
            "[reject] {} target={target} at {:.1}ms",
            reason_name(e.reason),
            ms(e.at),
        );
    }

    fn on_transition_complete(&mut self, e: &TransitionCompleteEvent) {
        let _ = writeln!(
            self.writer,
            "[done] section={} frames={} at {:.1}ms",
            e.index,
            e.frames,
            ms(e.at),
        );
    }

    fn on_store_failure(&mut self, e: &StoreFailureEvent) {
        let op = match e.op {
            StoreOp::Read => "read",
            StoreOp::Write => "write",
        };
        let _ = writeln!(self.writer, "[store] {op} failed: {}", e.error);
    }

    fn on_config_error(&mut self, e: &ConfigError) {
        let _ = writeln!(self.writer, "[config] {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageflow_core::error::StoreError;

    #[test]
    fn pretty_print_transition() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_transition_start(&TransitionStartEvent {
            from: 0,
            to: 1,
            start_offset: 0.0,
            end_offset: 900.0,
            at: HostTime(16_000),
        });
        sink.on_transition_complete(&TransitionCompleteEvent {
            index: 1,
            frames: 49,
            at: HostTime(816_000),
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("[start] 0 -> 1 offset 0px -> 900px at 16.0ms")
        );
        assert_eq!(lines.next(), Some("[done] section=1 frames=49 at 816.0ms"));
    }

    #[test]
    fn pretty_print_failures() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_transition_reject(&TransitionRejectEvent {
            target: Some(4),
            reason: RejectReason::OutOfRange,
            at: HostTime(0),
        });
        sink.on_store_failure(&StoreFailureEvent {
            op: StoreOp::Write,
            error: StoreError::Rejected,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("[reject] out-of-range target=4"), "got: {output}");
        assert!(output.contains("[store] write failed"), "got: {output}");
    }
}
