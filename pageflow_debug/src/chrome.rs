// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//! Each transition becomes a duration slice from its start to its completion
//! event; everything else is an instant event.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Host time ticks are already microseconds and are written unchanged. Store
/// failures and configuration errors carry no time stamp of their own; they
/// are placed at the time of the latest event before them.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut last_ts = 0_u64;

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Input(e) => {
                last_ts = e.at.ticks();
                events.push(json!({
                    "ph": "i",
                    "name": format!("{:?}", e.source),
                    "cat": "Input",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                }));
            }
            RecordedEvent::TransitionStart(e) => {
                last_ts = e.at.ticks();
                events.push(json!({
                    "ph": "B",
                    "name": "Transition",
                    "cat": "Paginator",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "from": e.from,
                        "to": e.to,
                        "start_offset": e.start_offset,
                        "end_offset": e.end_offset,
                    }
                }));
            }
            RecordedEvent::TransitionReject(e) => {
                last_ts = e.at.ticks();
                events.push(json!({
                    "ph": "i",
                    "name": "Reject",
                    "cat": "Paginator",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "reason": format!("{:?}", e.reason),
                        "target": e.target,
                    }
                }));
            }
            RecordedEvent::TransitionComplete(e) => {
                last_ts = e.at.ticks();
                events.push(json!({
                    "ph": "E",
                    "name": "Transition",
                    "cat": "Paginator",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "index": e.index,
                        "frames": e.frames,
                    }
                }));
            }
            RecordedEvent::StoreFailure(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "StoreFailure",
                    "cat": "Storage",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 1,
                    "s": "p",
                    "args": {
                        "op": format!("{:?}", e.op),
                        "error": e.error.to_string(),
                    }
                }));
            }
            RecordedEvent::ConfigError(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "ConfigError",
                    "cat": "Config",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "message": e.to_string(),
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}
