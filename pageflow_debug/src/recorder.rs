// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records, each led by a one-byte tag.
//! [`decode`] reads them back as an iterator of [`RecordedEvent`].

use pageflow_core::error::{ConfigError, StoreError};
use pageflow_core::input::InputSource;
use pageflow_core::time::HostTime;
use pageflow_core::trace::{
    InputEvent, RejectReason, StoreFailureEvent, StoreOp, TraceSink, TransitionCompleteEvent,
    TransitionRejectEvent, TransitionStartEvent,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_INPUT: u8 = 1;
const TAG_TRANSITION_START: u8 = 2;
const TAG_TRANSITION_REJECT: u8 = 3;
const TAG_TRANSITION_COMPLETE: u8 = 4;
const TAG_STORE_FAILURE: u8 = 5;
const TAG_CONFIG_ERROR: u8 = 6;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_index(&mut self, v: usize) {
        self.write_u64(u64::try_from(v).unwrap_or(u64::MAX));
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_option_i64(&mut self, v: Option<isize>) {
        match v.and_then(|t| i64::try_from(t).ok()) {
            Some(val) => {
                self.write_u8(1);
                self.buf.extend_from_slice(&val.to_le_bytes());
            }
            None => {
                self.write_u8(0);
                self.write_u64(0);
            }
        }
    }
}

fn source_code(s: InputSource) -> u8 {
    match s {
        InputSource::Wheel => 0,
        InputSource::Keyboard => 1,
        InputSource::Indicator => 2,
        InputSource::Touch => 3,
    }
}

fn reason_code(r: RejectReason) -> u8 {
    match r {
        RejectReason::Busy => 0,
        RejectReason::OutOfRange => 1,
        RejectReason::Ignored => 2,
    }
}

fn store_error_code(e: StoreError) -> u8 {
    match e {
        StoreError::Unavailable => 0,
        StoreError::Corrupt => 1,
        StoreError::Rejected => 2,
    }
}

impl TraceSink for RecorderSink {
    fn on_input(&mut self, e: &InputEvent) {
        self.write_u8(TAG_INPUT);
        self.write_u8(source_code(e.source));
        self.write_u64(e.at.ticks());
    }

    fn on_transition_start(&mut self, e: &TransitionStartEvent) {
        self.write_u8(TAG_TRANSITION_START);
        self.write_index(e.from);
        self.write_index(e.to);
        self.write_f64(e.start_offset);
        self.write_f64(e.end_offset);
        self.write_u64(e.at.ticks());
    }

    fn on_transition_reject(&mut self, e: &TransitionRejectEvent) {
        self.write_u8(TAG_TRANSITION_REJECT);
        self.write_option_i64(e.target);
        self.write_u8(reason_code(e.reason));
        self.write_u64(e.at.ticks());
    }

    fn on_transition_complete(&mut self, e: &TransitionCompleteEvent) {
        self.write_u8(TAG_TRANSITION_COMPLETE);
        self.write_index(e.index);
        self.write_u32(e.frames);
        self.write_u64(e.at.ticks());
    }

    fn on_store_failure(&mut self, e: &StoreFailureEvent) {
        self.write_u8(TAG_STORE_FAILURE);
        self.write_u8(match e.op {
            StoreOp::Read => 0,
            StoreOp::Write => 1,
        });
        self.write_u8(store_error_code(e.error));
    }

    fn on_config_error(&mut self, e: &ConfigError) {
        self.write_u8(TAG_CONFIG_ERROR);
        match *e {
            ConfigError::IndicatorMismatch {
                sections,
                indicators,
            } => {
                self.write_index(sections);
                self.write_index(indicators);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// An [`InputEvent`].
    Input(InputEvent),
    /// A [`TransitionStartEvent`].
    TransitionStart(TransitionStartEvent),
    /// A [`TransitionRejectEvent`].
    TransitionReject(TransitionRejectEvent),
    /// A [`TransitionCompleteEvent`].
    TransitionComplete(TransitionCompleteEvent),
    /// A [`StoreFailureEvent`].
    StoreFailure(StoreFailureEvent),
    /// A [`ConfigError`].
    ConfigError(ConfigError),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
///
/// Stops at the first unknown tag or truncated record.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[b]| b)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_index(&mut self) -> Option<usize> {
        usize::try_from(self.read_u64()?).ok()
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_time(&mut self) -> Option<HostTime> {
        self.read_u64().map(HostTime)
    }

    fn read_option_i64(&mut self) -> Option<Option<isize>> {
        let present = self.read_u8()?;
        let val = i64::from_le_bytes(self.take()?);
        Some(if present != 0 {
            isize::try_from(val).ok()
        } else {
            None
        })
    }

    fn read_source(&mut self) -> Option<InputSource> {
        Some(match self.read_u8()? {
            0 => InputSource::Wheel,
            1 => InputSource::Keyboard,
            2 => InputSource::Indicator,
            _ => InputSource::Touch,
        })
    }

    fn read_reason(&mut self) -> Option<RejectReason> {
        Some(match self.read_u8()? {
            0 => RejectReason::Busy,
            1 => RejectReason::OutOfRange,
            _ => RejectReason::Ignored,
        })
    }

    fn read_store_error(&mut self) -> Option<StoreError> {
        Some(match self.read_u8()? {
            0 => StoreError::Unavailable,
            1 => StoreError::Corrupt,
            _ => StoreError::Rejected,
        })
    }

    fn decode_input(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Input(InputEvent {
            source: self.read_source()?,
            at: self.read_time()?,
        }))
    }

    fn decode_transition_start(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::TransitionStart(TransitionStartEvent {
            from: self.read_index()?,
            to: self.read_index()?,
            start_offset: self.read_f64()?,
            end_offset: self.read_f64()?,
            at: self.read_time()?,
        }))
    }

    fn decode_transition_reject(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::TransitionReject(TransitionRejectEvent {
            target: self.read_option_i64()?,
            reason: self.read_reason()?,
            at: self.read_time()?,
        }))
    }

    fn decode_transition_complete(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::TransitionComplete(TransitionCompleteEvent {
            index: self.read_index()?,
            frames: self.read_u32()?,
            at: self.read_time()?,
        }))
    }

    fn decode_store_failure(&mut self) -> Option<RecordedEvent> {
        let op = if self.read_u8()? == 0 {
            StoreOp::Read
        } else {
            StoreOp::Write
        };
        Some(RecordedEvent::StoreFailure(StoreFailureEvent {
            op,
            error: self.read_store_error()?,
        }))
    }

    fn decode_config_error(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ConfigError(ConfigError::IndicatorMismatch {
            sections: self.read_index()?,
            indicators: self.read_index()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_INPUT => self.decode_input(),
            TAG_TRANSITION_START => self.decode_transition_start(),
            TAG_TRANSITION_REJECT => self.decode_transition_reject(),
            TAG_TRANSITION_COMPLETE => self.decode_transition_complete(),
            TAG_STORE_FAILURE => self.decode_store_failure(),
            TAG_CONFIG_ERROR => self.decode_config_error(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_start() -> TransitionStartEvent {
        TransitionStartEvent {
            from: 1,
            to: 2,
            start_offset: 900.0,
            end_offset: 1800.0,
            at: HostTime(1_000_000),
        }
    }

    #[test]
    fn records_a_session_in_order() {
        let mut rec = RecorderSink::new();
        rec.on_input(&InputEvent {
            source: InputSource::Wheel,
            at: HostTime(950_000),
        });
        rec.on_transition_start(&sample_start());
        rec.on_transition_reject(&TransitionRejectEvent {
            target: None,
            reason: RejectReason::Busy,
            at: HostTime(1_200_000),
        });
        rec.on_transition_complete(&TransitionCompleteEvent {
            index: 2,
            frames: 49,
            at: HostTime(1_800_000),
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 4);
        assert!(matches!(
            events[0],
            RecordedEvent::Input(InputEvent {
                source: InputSource::Wheel,
                ..
            })
        ));
        assert_eq!(events[1], RecordedEvent::TransitionStart(sample_start()));
        assert!(matches!(
            events[2],
            RecordedEvent::TransitionReject(TransitionRejectEvent {
                reason: RejectReason::Busy,
                target: None,
                ..
            })
        ));
        match &events[3] {
            RecordedEvent::TransitionComplete(e) => {
                assert_eq!(e.index, 2);
                assert_eq!(e.frames, 49);
            }
            other => panic!("expected TransitionComplete, got {other:?}"),
        }
    }

    #[test]
    fn negative_targets_survive() {
        let mut rec = RecorderSink::new();
        rec.on_transition_reject(&TransitionRejectEvent {
            target: Some(-1),
            reason: RejectReason::OutOfRange,
            at: HostTime(5),
        });
        let events: Vec<_> = decode(rec.as_bytes()).collect();
        match &events[..] {
            [RecordedEvent::TransitionReject(e)] => assert_eq!(e.target, Some(-1)),
            other => panic!("expected one reject, got {other:?}"),
        }
    }

    #[test]
    fn failures_and_config_errors() {
        let mut rec = RecorderSink::new();
        rec.on_store_failure(&StoreFailureEvent {
            op: StoreOp::Read,
            error: StoreError::Corrupt,
        });
        rec.on_config_error(&ConfigError::IndicatorMismatch {
            sections: 4,
            indicators: 3,
        });
        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(
            events,
            [
                RecordedEvent::StoreFailure(StoreFailureEvent {
                    op: StoreOp::Read,
                    error: StoreError::Corrupt,
                }),
                RecordedEvent::ConfigError(ConfigError::IndicatorMismatch {
                    sections: 4,
                    indicators: 3,
                }),
            ]
        );
    }

    #[test]
    fn truncated_record_stops_decoding() {
        let mut rec = RecorderSink::new();
        rec.on_transition_start(&sample_start());
        rec.on_transition_start(&sample_start());
        let bytes = rec.into_bytes();
        let events: Vec<_> = decode(&bytes[..bytes.len() - 3]).collect();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }
}
